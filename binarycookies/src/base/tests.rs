use crate::base::cookieerror::CookieError;

#[test]
fn test_exit_codes_are_distinct_and_nonzero() {
    let errors = [
        CookieError::bad_magic(b"xxxx"),
        CookieError::truncated(4, 4, 0),
        CookieError::out_of_bounds(-4, 10),
        CookieError::negative_length("page count", -1),
        CookieError::file_not_found("a"),
        CookieError::not_a_file("b"),
        CookieError::io("c", "denied"),
        CookieError::serialize("bad"),
    ];

    let mut codes: Vec<i32> = errors.iter().map(|e| e.exit_code()).collect();
    assert!(codes.iter().all(|&c| c != 0));
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), errors.len());
}

#[test]
fn test_decode_error_classification() {
    assert!(CookieError::bad_magic(b"xxxx").is_decode_error());
    assert!(CookieError::truncated(0, 4, 0).is_decode_error());
    assert!(!CookieError::file_not_found("x").is_decode_error());
}

#[test]
fn test_bad_magic_message() {
    let err = CookieError::bad_magic(b"xxxx");
    assert_eq!(
        err.to_string(),
        "Not a Cookies.binarycookies file (magic [78, 78, 78, 78])"
    );
}
