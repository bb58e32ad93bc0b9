use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

/// Cookie set by app.tapbak.co on the shared parent domain.
pub const AUTH_COOKIE: &str = "tapbak_auth";

/// True only if the cookie string contains an entry literally named
/// `tapbak_auth` whose value is exactly `true`.
pub fn parse_auth_cookie(cookies: &str) -> bool {
    cookies.split(';').any(|pair| {
        let mut parts = pair.trim().splitn(2, '=');
        parts.next() == Some(AUTH_COOKIE) && parts.next() == Some("true")
    })
}

/// One-shot check at mount; never re-validated against the server. The flag
/// only switches CTA labels and targets, it is not access control.
pub fn is_logged_in() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
        .and_then(|d| d.cookie().ok())
        .map(|cookies| parse_auth_cookie(&cookies))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::parse_auth_cookie;

    #[test]
    fn finds_flag_among_other_cookies() {
        assert!(parse_auth_cookie("a=1; tapbak_auth=true; b=2"));
    }

    #[test]
    fn exact_value_required() {
        assert!(!parse_auth_cookie("tapbak_auth=false"));
        assert!(!parse_auth_cookie("tapbak_auth=TRUE"));
        assert!(!parse_auth_cookie("tapbak_auth=truely"));
        assert!(!parse_auth_cookie("tapbak_auth="));
    }

    #[test]
    fn exact_name_required() {
        assert!(!parse_auth_cookie("not_tapbak_auth=true"));
        assert!(!parse_auth_cookie("tapbak=true"));
    }

    #[test]
    fn absent_or_empty_is_logged_out() {
        assert!(!parse_auth_cookie(""));
        assert!(!parse_auth_cookie("session=abc; theme=dark"));
    }

    #[test]
    fn whitespace_around_pairs_is_trimmed() {
        assert!(parse_auth_cookie("  tapbak_auth=true  "));
        assert!(parse_auth_cookie("a=1;tapbak_auth=true"));
    }
}
