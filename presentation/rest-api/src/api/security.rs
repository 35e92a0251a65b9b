use poem::Request;

use business::domain::shared::value_objects::Credential;

const BEARER_SCHEME: &str = "bearer";

/// Reads the caller's credential from the `Authorization` header.
///
/// The `Bearer` scheme is optional and matched case-insensitively; a header
/// without it is taken as the raw token. A missing or blank header yields
/// `None`.
pub fn credential_from_request(req: &Request) -> Option<Credential> {
    req.header("Authorization").and_then(credential_from_header)
}

pub fn credential_from_header(value: &str) -> Option<Credential> {
    let value = value.trim_start();
    let token = match value.split_once(char::is_whitespace) {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case(BEARER_SCHEME) => token,
        None if value.trim_end().eq_ignore_ascii_case(BEARER_SCHEME) => "",
        _ => value,
    };
    Credential::new(token.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_strip_bearer_scheme() {
        let credential = credential_from_header("Bearer eyJhbGciOiJIUzI1NiJ9.e30.sig").unwrap();
        assert_eq!(credential.expose(), "eyJhbGciOiJIUzI1NiJ9.e30.sig");
    }

    #[test]
    fn should_match_scheme_case_insensitively() {
        let credential = credential_from_header("bearer abc").unwrap();
        assert_eq!(credential.expose(), "abc");

        let credential = credential_from_header("BEARER   abc  ").unwrap();
        assert_eq!(credential.expose(), "abc");
    }

    #[test]
    fn should_accept_raw_token_without_scheme() {
        let credential = credential_from_header("abc.def.ghi").unwrap();
        assert_eq!(credential.expose(), "abc.def.ghi");
    }

    #[test]
    fn should_treat_blank_token_as_missing() {
        assert!(credential_from_header("").is_none());
        assert!(credential_from_header("Bearer ").is_none());
        assert!(credential_from_header("Bearer    ").is_none());
        assert!(credential_from_header("bearer").is_none());
        assert!(credential_from_header("  BEARER\t").is_none());
    }

    #[test]
    fn should_keep_token_that_only_starts_like_the_scheme() {
        let credential = credential_from_header("Bearerish-token").unwrap();
        assert_eq!(credential.expose(), "Bearerish-token");
    }

    #[test]
    fn should_read_authorization_header_from_request() {
        let req = Request::builder()
            .header("Authorization", "Bearer token-u1")
            .finish();

        let credential = credential_from_request(&req).unwrap();

        assert_eq!(credential.expose(), "token-u1");
        assert!(credential_from_request(&Request::default()).is_none());
    }
}
