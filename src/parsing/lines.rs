use std::io::{self, BufRead};

/// Splits `reader` on `\n` and decodes each line lossily.
///
/// Bytes that are not valid UTF-8 become U+FFFD, which the tokenizer treats
/// as a separator like any other non-ASCII character. A trailing `\r` is
/// dropped so CRLF input reads the same as LF input.
pub fn lossy_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.split(b'\n').map(|bytes| {
        let mut bytes = bytes?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    })
}
