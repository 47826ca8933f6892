use super::Reader;
use dnscheck_domain::LookupError;

/// Maximum length of a single label (RFC 1035 §2.3.4).
const MAX_LABEL_LEN: usize = 63;

/// Maximum wire length of a full name.
const MAX_NAME_LEN: usize = 255;

/// Hard cap on compression-pointer chases per name. Legitimate messages
/// need a handful at most; a cycle or self-referential pointer exhausts
/// the budget and fails as malformed instead of looping.
const MAX_POINTER_JUMPS: usize = 16;

/// Append a domain name in length-prefixed label format, terminated by
/// the zero-length root label.
pub fn pack_name(buf: &mut Vec<u8>, domain: &str) -> Result<(), LookupError> {
    for label in domain.split('.') {
        if label.is_empty() {
            return Err(LookupError::InvalidDomainName(format!(
                "empty label in '{}'",
                domain
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(LookupError::InvalidDomainName(format!(
                "label '{}' exceeds {} octets",
                label, MAX_LABEL_LEN
            )));
        }
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0);
    Ok(())
}

/// Read a possibly-compressed name from the current position.
///
/// After a pointer is followed, the reader is restored to just past the
/// pointer, whatever the chain did in between.
pub fn unpack_name(reader: &mut Reader<'_>) -> Result<String, LookupError> {
    let mut labels: Vec<String> = Vec::new();
    let mut name_len = 0usize;
    let mut jumps = 0usize;
    let mut resume_at: Option<usize> = None;

    loop {
        let len = reader.read_u8()?;

        match len & 0b1100_0000 {
            0b0000_0000 => {
                if len == 0 {
                    break;
                }
                name_len += len as usize + 1;
                if name_len > MAX_NAME_LEN {
                    return Err(LookupError::MalformedResponse(
                        "name exceeds 255 octets".to_string(),
                    ));
                }
                let bytes = reader.read_bytes(len as usize)?;
                labels.push(String::from_utf8_lossy(bytes).into_owned());
            }
            0b1100_0000 => {
                let low = reader.read_u8()?;
                let offset = (((len & 0b0011_1111) as usize) << 8) | low as usize;

                if resume_at.is_none() {
                    resume_at = Some(reader.pos());
                }

                jumps += 1;
                if jumps > MAX_POINTER_JUMPS {
                    return Err(LookupError::MalformedResponse(
                        "compression pointer chain too deep".to_string(),
                    ));
                }
                if offset >= reader.len() {
                    return Err(LookupError::MalformedResponse(format!(
                        "compression pointer offset {} out of range",
                        offset
                    )));
                }

                reader.seek(offset);
            }
            // 0b01 and 0b10 are reserved label types.
            _ => {
                return Err(LookupError::MalformedResponse(format!(
                    "reserved label type bits in 0x{:02x}",
                    len
                )));
            }
        }
    }

    if let Some(pos) = resume_at {
        reader.seek(pos);
    }

    Ok(labels.join("."))
}
