use std::io::Write;

/// Characters of a token that may appear in log output
const TOKEN_PREFIX_LEN: usize = 8;

/// Write the secret exactly as received: no trailing newline, flushed
pub fn write_secret<W: Write>(out: &mut W, secret: &str) -> std::io::Result<()> {
    out.write_all(secret.as_bytes())?;
    out.flush()
}

/// Mask a bearer token for logging, e.g. `eyJ0eXAi***`
pub fn mask_token(token: &str) -> String {
    let prefix: String = token.chars().take(TOKEN_PREFIX_LEN).collect();
    format!("{prefix}***")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_secret_has_no_trailing_newline() {
        let mut buf = Vec::new();
        write_secret(&mut buf, "abc123").unwrap();
        assert_eq!(buf, b"abc123");
    }

    #[test]
    fn test_write_empty_secret() {
        let mut buf = Vec::new();
        write_secret(&mut buf, "").unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("eyJ0eXAiOiJKV1QiLCJhbGci"), "eyJ0eXAi***");
        // Short tokens must not panic
        assert_eq!(mask_token("abc"), "abc***");
        assert_eq!(mask_token(""), "***");
    }
}
