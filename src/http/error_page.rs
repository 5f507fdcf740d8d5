//! Generated HTML error responses.
//!
//! # Responsibilities
//! - Build the complete byte sequence of an error response: status line,
//!   Content-Type, exact Content-Length, blank line, HTML body
//! - Drop the response entirely when a buffer cap would be exceeded;
//!   a truncated response is never sent

/// Cap on the generated header block, terminating blank line included.
const MAX_HEADER_BYTES: usize = 8192;

/// Build an `HTTP/1.0` error response with a fixed HTML body template.
///
/// Returns `None` when the body would exceed `max_body` bytes or the header
/// block would exceed its own cap.
pub fn build_error_response(
    code: &str,
    short_message: &str,
    long_message: &str,
    max_body: usize,
) -> Option<Vec<u8>> {
    let body = format!(
        "<!DOCTYPE html>\r\n\
         <html>\r\n\
         <head><title>Tiny Error</title></head>\r\n\
         <body bgcolor=\"ffffff\">\r\n\
         <h1>{code}: {short_message}</h1>\r\n\
         <p>{long_message}</p>\r\n\
         <hr /><em>The Tiny Web server</em>\r\n\
         </body></html>\r\n"
    );
    if body.len() > max_body {
        return None;
    }

    let header = format!(
        "HTTP/1.0 {code} {short_message}\r\n\
         Content-Type: text/html\r\n\
         Content-Length: {}\r\n\r\n",
        body.len()
    );
    if header.len() > MAX_HEADER_BYTES {
        return None;
    }

    let mut response = header.into_bytes();
    response.extend_from_slice(body.as_bytes());
    Some(response)
}
