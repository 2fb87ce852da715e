/// Headers every order report must carry, lower-case.
pub const REQUIRED_HEADERS: [&str; 4] = ["sku", "product-name", "quantity-to-ship", "order-id"];

/// Required headers absent from `headers`, in `REQUIRED_HEADERS` order.
/// Comparison is case-insensitive and ignores surrounding whitespace.
pub fn missing_headers<S: AsRef<str>>(headers: &[S]) -> Vec<String> {
    let present: Vec<String> = headers
        .iter()
        .map(|h| h.as_ref().trim().to_lowercase())
        .collect();

    REQUIRED_HEADERS
        .iter()
        .filter(|required| !present.iter().any(|p| p == *required))
        .map(|required| required.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_present_any_case() {
        let headers = ["Order-ID", "SKU", "Product-Name", "Quantity-To-Ship", "buyer-name"];
        assert!(missing_headers(&headers[..]).is_empty());
    }

    #[test]
    fn test_reports_exactly_the_missing_ones() {
        let headers = ["sku", "product-name", "quantity-to-ship"];
        assert_eq!(missing_headers(&headers[..]), vec!["order-id"]);

        let headers = ["order-id", "product-name"];
        assert_eq!(missing_headers(&headers[..]), vec!["sku", "quantity-to-ship"]);
    }

    #[test]
    fn test_empty_header_row() {
        let headers: [&str; 0] = [];
        assert_eq!(missing_headers(&headers[..]).len(), REQUIRED_HEADERS.len());
    }
}
