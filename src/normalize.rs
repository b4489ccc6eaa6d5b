//! Hostname normalization for character-mode input.
//!
//! Token mode splits raw lines on a delimiter and never goes through here.

/// Normalize a raw hostname line.
///
/// Defaults:
/// - Strip the Windows `DOMAIN\` prefix (unless `keep_prefix`).
/// - Strip the DNS domain (`server.domain.local` -> `server`) unless `keep_fqdn`.
///
/// Leading slashes and backslashes left over from UNC-style input
/// (`\\server`, `/server`) are removed afterwards. The result may be empty;
/// callers skip empty results.
pub fn extract_hostname(raw: &str, keep_prefix: bool, keep_fqdn: bool) -> String {
    let mut tmp = raw.trim();

    // Windows DOMAIN\host
    if !keep_prefix {
        if let Some(idx) = tmp.find('\\') {
            tmp = &tmp[idx + 1..];
        }
    }

    // DNS suffix
    if !keep_fqdn {
        if let Some(idx) = tmp.find('.') {
            tmp = &tmp[..idx];
        }
    }

    tmp.trim_start_matches(['\\', '/']).trim().to_string()
}
