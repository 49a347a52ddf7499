//! Host identifiers for LF names.
//!
//! LF identifiers may contain characters such as `-`, `.` or `?` that the
//! host does not allow. The emitter replaces each of them with its decimal
//! character code, so `sum-of-squares` is bound as `sum45of45squares`.

/// Mangle an LF identifier into a host identifier.
pub fn mangle(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            out.push(ch);
        } else {
            out.push_str(&u32::from(ch).to_string());
        }
    }
    out
}
