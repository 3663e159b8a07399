//! Compact serialization: `header.payload.signature`

/// Segment separator
pub const SEPARATOR: char = '.';

/// The three segments of a structurally valid token, borrowed from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parts<'a> {
    /// Encoded header segment
    pub header: &'a str,
    /// Encoded payload segment
    pub payload: &'a str,
    /// Encoded signature segment
    pub signature: &'a str,
    signing_input: &'a str,
}

impl<'a> Parts<'a> {
    /// `header.payload`, the bytes the signature covers
    #[must_use]
    pub fn signing_input(&self) -> &'a str {
        self.signing_input
    }
}

/// Join encoded segments into a token
#[must_use]
pub fn assemble(header: &str, payload: &str, signature: &str) -> String {
    let mut token = String::with_capacity(header.len() + payload.len() + signature.len() + 2);
    token.push_str(header);
    token.push(SEPARATOR);
    token.push_str(payload);
    token.push(SEPARATOR);
    token.push_str(signature);
    token
}

/// Split a token into its segments.
///
/// Returns `None` unless there are exactly two separators. Segments may be
/// empty; that is left for signature verification to reject.
#[must_use]
pub fn split(token: &str) -> Option<Parts<'_>> {
    let mut segments = token.split(SEPARATOR);
    match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(header), Some(payload), Some(signature), None) => Some(Parts {
            header,
            payload,
            signature,
            signing_input: &token[..header.len() + 1 + payload.len()],
        }),
        _ => None,
    }
}
