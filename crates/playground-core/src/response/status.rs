//! HTTP status reason phrases.

/// Reason phrase for a status code.
///
/// Codes outside the table map to "Unknown".
pub fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(200, "OK")]
    #[case(201, "Created")]
    #[case(204, "No Content")]
    #[case(400, "Bad Request")]
    #[case(401, "Unauthorized")]
    #[case(403, "Forbidden")]
    #[case(404, "Not Found")]
    #[case(500, "Internal Server Error")]
    fn test_status_text_known(#[case] status: u16, #[case] expected: &str) {
        assert_eq!(status_text(status), expected);
    }

    #[rstest]
    #[case(100)]
    #[case(301)]
    #[case(418)]
    #[case(502)]
    #[case(0)]
    fn test_status_text_unknown(#[case] status: u16) {
        assert_eq!(status_text(status), "Unknown");
    }
}
