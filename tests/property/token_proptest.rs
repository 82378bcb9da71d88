//! Property-based tests for token issuance and verification

use assert_matches::assert_matches;
use proptest::prelude::*;
use social_media_api::backend::auth::sessions::SessionTokens;
use social_media_api::backend::auth::{AuthConfig, TokenError, TokenType};

fn tokens(secret: &str) -> SessionTokens {
    SessionTokens::new(&AuthConfig::new(secret, "HS256").unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_subject_survives_issuance(email in "[a-z0-9.]{1,20}@[a-z]{1,10}\\.[a-z]{2,4}") {
        let tokens = tokens("prop-secret");

        let access = tokens.create_access_token(&email).unwrap();
        prop_assert_eq!(
            tokens.subject_for_token_type(&access, TokenType::Access).unwrap(),
            email.clone()
        );

        let confirmation = tokens.create_confirmation_token(&email).unwrap();
        prop_assert_eq!(
            tokens.subject_for_token_type(&confirmation, TokenType::Confirmation).unwrap(),
            email
        );
    }

    #[test]
    fn test_token_type_is_enforced(email in "[a-z]{1,12}@example\\.com") {
        let tokens = tokens("prop-secret");

        let access = tokens.create_access_token(&email).unwrap();
        assert_matches!(
            tokens.subject_for_token_type(&access, TokenType::Confirmation),
            Err(TokenError::WrongTokenType { .. })
        );

        let confirmation = tokens.create_confirmation_token(&email).unwrap();
        assert_matches!(
            tokens.subject_for_token_type(&confirmation, TokenType::Access),
            Err(TokenError::WrongTokenType { .. })
        );
    }

    #[test]
    fn test_foreign_secret_is_rejected(
        email in "[a-z]{1,12}@example\\.com",
        secret in "[a-zA-Z0-9]{8,32}",
    ) {
        prop_assume!(secret != "prop-secret");
        let token = tokens(&secret).create_access_token(&email).unwrap();

        prop_assert_eq!(
            tokens("prop-secret").subject_for_token_type(&token, TokenType::Access),
            Err(TokenError::InvalidToken)
        );
    }

    #[test]
    fn test_arbitrary_input_never_verifies(input in ".{0,200}") {
        prop_assert!(tokens("prop-secret")
            .subject_for_token_type(&input, TokenType::Access)
            .is_err());
    }
}
