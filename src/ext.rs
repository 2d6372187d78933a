/// Strip a single leading dot from an extension argument, so that `png` and
/// `.png` are accepted interchangeably.
pub(crate) fn normalize(ext: &str) -> &str {
    ext.strip_prefix('.').unwrap_or(ext)
}

/// The part of `name` preceding the `.{ext}` suffix, if the name carries that
/// suffix.
pub(crate) fn strip_suffix<'a>(name: &'a str, ext: &str) -> Option<&'a str> {
    name.strip_suffix(ext)?.strip_suffix('.')
}

/// Join a base name with an extension.
pub(crate) fn with_ext(stem: &str, ext: &str) -> String {
    format!("{stem}.{ext}")
}
