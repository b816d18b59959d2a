//! Token resolution.
//! Expands a short token into an identifier fragment, then finds the file
//! carrying that fragment in the source folder.

use globset::Glob;
use regex::Regex;
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

use crate::errors::ResolveError;

/// Ticket-code shape: word characters, a hyphen, digits ("de-6", "portal-45").
static TICKET_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+-[0-9]+").expect("ticket-code regex"));

/// Bare numeric id ("1234"), which stands for a hotfix.
static BARE_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("bare-id regex"));

/// Derive the identifier fragment a token stands for.
///
/// A ticket-code substring is used verbatim; a purely numeric token becomes
/// `hotfix-<token>`. Tokens are taken as-is: no trimming, no case folding.
fn fragment_for(token: &str) -> Result<String, ResolveError> {
    if let Some(m) = TICKET_CODE.find(token) {
        return Ok(m.as_str().to_string());
    }
    if BARE_ID.is_match(token) {
        return Ok(format!("hotfix-{token}"));
    }
    Err(ResolveError::UnknownPattern(token.to_string()))
}

/// Resolve `token` to the name of a matching entry in `dir`.
///
/// The glob `*<fragment>*` is matched against entry names in
/// directory-enumeration order; when several entries match, whichever the
/// filesystem lists first wins. The order is platform-dependent and no
/// tie-break is applied, so with ambiguous tokens the pick is not
/// deterministic across systems.
pub fn resolve_token(dir: &Path, token: &str) -> Result<OsString, ResolveError> {
    let fragment = fragment_for(token)?;
    let matcher = Glob::new(&format!("*{fragment}*"))?.compile_matcher();
    debug!(token, fragment = %fragment, "derived match fragment");

    // A missing or unreadable folder yields no candidates, like a glob over
    // a nonexistent path; the caller sees an ordinary miss.
    let Ok(entries) = fs::read_dir(dir) else {
        return Err(ResolveError::NoMatch(token.to_string()));
    };

    for entry in entries.flatten() {
        let name = entry.file_name();
        if matcher.is_match(Path::new(&name)) {
            debug!(token, name = %name.to_string_lossy(), "resolved token");
            return Ok(name);
        }
    }

    Err(ResolveError::NoMatch(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn ticket_code_fragment_is_verbatim() {
        assert_eq!(fragment_for("de-6").unwrap(), "de-6");
        assert_eq!(fragment_for("portal-45").unwrap(), "portal-45");
    }

    #[test]
    fn ticket_code_substring_wins_inside_longer_tokens() {
        assert_eq!(fragment_for("fix/de-6.patch").unwrap(), "de-6");
    }

    #[test]
    fn bare_number_expands_to_hotfix() {
        assert_eq!(fragment_for("1234").unwrap(), "hotfix-1234");
    }

    #[test]
    fn garbage_token_is_a_miss() {
        let err = fragment_for("!!!").unwrap_err();
        assert!(err.is_miss());
        assert!(format!("{err}").contains("any known pattern"));
    }

    #[test]
    fn resolves_matching_entry_by_bare_number() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("hotfix-1234-fix.patch"), b"x").unwrap();
        fs::write(td.path().join("unrelated.txt"), b"x").unwrap();

        let name = resolve_token(td.path(), "1234").unwrap();
        assert_eq!(name, OsString::from("hotfix-1234-fix.patch"));
    }

    #[test]
    fn resolves_matching_entry_by_ticket_code() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("portal-45-nav.patch"), b"x").unwrap();

        let name = resolve_token(td.path(), "portal-45").unwrap();
        assert_eq!(name, OsString::from("portal-45-nav.patch"));
    }

    #[test]
    fn no_candidates_is_a_miss() {
        let td = tempdir().unwrap();
        let err = resolve_token(td.path(), "1234").unwrap_err();
        assert!(matches!(err, ResolveError::NoMatch(_)));
    }

    #[test]
    fn missing_folder_is_a_miss_not_a_failure() {
        let err = resolve_token(Path::new("does/not/exist"), "de-6").unwrap_err();
        assert!(matches!(err, ResolveError::NoMatch(_)));
    }

    #[test]
    fn ambiguous_token_resolves_to_one_of_the_candidates() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("de-6-a.patch"), b"x").unwrap();
        fs::write(td.path().join("de-6-b.patch"), b"x").unwrap();

        // Which candidate wins is enumeration-order-dependent; only assert
        // that one of them is picked.
        let name = resolve_token(td.path(), "de-6").unwrap();
        assert!(name == OsString::from("de-6-a.patch") || name == OsString::from("de-6-b.patch"));
    }
}
