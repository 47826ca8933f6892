use super::name::unpack_name;
use super::Reader;
use dnscheck_domain::{DnsResponse, LookupError, RData, ResourceRecord, ResponseCode};
use std::net::{Ipv4Addr, Ipv6Addr};

const FLAG_QR: u16 = 0x8000;
const FLAG_TC: u16 = 0x0200;

const TYPE_A: u16 = 1;
const TYPE_NS: u16 = 2;
const TYPE_CNAME: u16 = 5;
const TYPE_SOA: u16 = 6;
const TYPE_PTR: u16 = 12;
const TYPE_MX: u16 = 15;
const TYPE_TXT: u16 = 16;
const TYPE_AAAA: u16 = 28;
const TYPE_SRV: u16 = 33;
const TYPE_CAA: u16 = 257;

/// Cheap truncation check on the raw header, used to decide the TCP
/// retry before attempting a full decode of a cut-off UDP payload.
pub fn is_truncated(bytes: &[u8]) -> bool {
    bytes.len() >= 4 && bytes[2] & 0x02 != 0
}

/// Decode a response message.
///
/// All four sections are walked even though only answers are kept:
/// section counts that overrun the actual payload are how truncated or
/// forged messages show up, and they must fail loudly.
pub fn decode_response(bytes: &[u8]) -> Result<DnsResponse, LookupError> {
    let mut reader = Reader::new(bytes);

    let id = reader.read_u16()?;
    let flags = reader.read_u16()?;
    let qdcount = reader.read_u16()?;
    let ancount = reader.read_u16()?;
    let nscount = reader.read_u16()?;
    let arcount = reader.read_u16()?;

    if flags & FLAG_QR == 0 {
        return Err(LookupError::MalformedResponse(
            "QR flag not set on response".to_string(),
        ));
    }

    let code = ResponseCode::from_u8((flags & 0x000F) as u8);
    let truncated = flags & FLAG_TC != 0;

    for _ in 0..qdcount {
        skip_question(&mut reader)?;
    }

    let mut answers = Vec::with_capacity(ancount as usize);
    for _ in 0..ancount {
        answers.push(parse_record(&mut reader)?);
    }

    // Authority and additional records are parsed for validity and
    // dropped.
    for _ in 0..nscount {
        parse_record(&mut reader)?;
    }
    for _ in 0..arcount {
        parse_record(&mut reader)?;
    }

    Ok(DnsResponse {
        id,
        code,
        truncated,
        answers,
    })
}

fn skip_question(reader: &mut Reader<'_>) -> Result<(), LookupError> {
    unpack_name(reader)?;
    reader.read_u16()?; // QTYPE
    reader.read_u16()?; // QCLASS
    Ok(())
}

fn parse_record(reader: &mut Reader<'_>) -> Result<ResourceRecord, LookupError> {
    let name = unpack_name(reader)?;
    let type_code = reader.read_u16()?;
    let _class = reader.read_u16()?;
    let ttl = reader.read_u32()?;
    let rdlength = reader.read_u16()? as usize;

    let rdata_start = reader.pos();
    let rdata_end = rdata_start
        .checked_add(rdlength)
        .filter(|end| *end <= reader.len())
        .ok_or_else(|| LookupError::MalformedResponse("RDATA overruns message".to_string()))?;

    let rdata = match type_code {
        TYPE_A => {
            if rdlength != 4 {
                return Err(LookupError::MalformedResponse(format!(
                    "A record with RDLENGTH {}",
                    rdlength
                )));
            }
            let octets = reader.read_bytes(4)?;
            RData::A(Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]))
        }
        TYPE_AAAA => {
            if rdlength != 16 {
                return Err(LookupError::MalformedResponse(format!(
                    "AAAA record with RDLENGTH {}",
                    rdlength
                )));
            }
            let octets = reader.read_bytes(16)?;
            let mut addr = [0u8; 16];
            addr.copy_from_slice(octets);
            RData::Aaaa(Ipv6Addr::from(addr))
        }
        TYPE_CNAME => RData::Cname(unpack_name(reader)?),
        TYPE_NS => RData::Ns(unpack_name(reader)?),
        TYPE_PTR => RData::Ptr(unpack_name(reader)?),
        TYPE_MX => {
            let preference = reader.read_u16()?;
            let exchange = unpack_name(reader)?;
            RData::Mx {
                preference,
                exchange,
            }
        }
        TYPE_TXT => {
            let mut chunks = Vec::new();
            while reader.pos() < rdata_end {
                let len = reader.read_u8()? as usize;
                if reader.pos() + len > rdata_end {
                    return Err(LookupError::MalformedResponse(
                        "TXT chunk overruns RDATA".to_string(),
                    ));
                }
                let bytes = reader.read_bytes(len)?;
                chunks.push(String::from_utf8_lossy(bytes).into_owned());
            }
            RData::Txt(chunks)
        }
        TYPE_SOA => {
            let mname = unpack_name(reader)?;
            let rname = unpack_name(reader)?;
            RData::Soa {
                mname,
                rname,
                serial: reader.read_u32()?,
                refresh: reader.read_u32()?,
                retry: reader.read_u32()?,
                expire: reader.read_u32()?,
                minimum: reader.read_u32()?,
            }
        }
        TYPE_SRV => {
            let priority = reader.read_u16()?;
            let weight = reader.read_u16()?;
            let port = reader.read_u16()?;
            let target = unpack_name(reader)?;
            RData::Srv {
                priority,
                weight,
                port,
                target,
            }
        }
        TYPE_CAA => {
            let flags = reader.read_u8()?;
            let tag_len = reader.read_u8()? as usize;
            if reader.pos() + tag_len > rdata_end {
                return Err(LookupError::MalformedResponse(
                    "CAA tag overruns RDATA".to_string(),
                ));
            }
            let tag = String::from_utf8_lossy(reader.read_bytes(tag_len)?).into_owned();
            let value_len = rdata_end
                .checked_sub(reader.pos())
                .ok_or_else(|| LookupError::MalformedResponse("CAA RDATA too short".to_string()))?;
            let value = String::from_utf8_lossy(reader.read_bytes(value_len)?).into_owned();
            RData::Caa { flags, tag, value }
        }
        other => {
            let data = reader.read_bytes(rdlength)?.to_vec();
            RData::Other {
                type_code: other,
                data,
            }
        }
    };

    // Name-bearing RDATA may end with a compression pointer that leaves
    // the reader short of the declared length; trust RDLENGTH for
    // section framing.
    reader.seek(rdata_end);

    Ok(ResourceRecord {
        name,
        type_code,
        ttl,
        rdata,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::encoder::encode_query;
    use crate::wire::name::pack_name;
    use dnscheck_domain::RecordType;

    /// Minimal response builder: header + echoed question + raw answer
    /// bytes appended by each test.
    fn response_header(id: u16, flags: u16, ancount: u16) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&id.to_be_bytes());
        buf.extend_from_slice(&flags.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&ancount.to_be_bytes());
        buf.extend_from_slice(&0u16.to_be_bytes());
        buf.extend_from_slice(&0u16.to_be_bytes());
        pack_name(&mut buf, "example.com").unwrap();
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf
    }

    fn push_a_record(buf: &mut Vec<u8>, ip: [u8; 4]) {
        // Name as a pointer to the question name at offset 12.
        buf.extend_from_slice(&[0xC0, 0x0C]);
        buf.extend_from_slice(&TYPE_A.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&300u32.to_be_bytes());
        buf.extend_from_slice(&4u16.to_be_bytes());
        buf.extend_from_slice(&ip);
    }

    #[test]
    fn test_decode_a_answer() {
        let mut buf = response_header(0x1234, 0x8180, 1);
        push_a_record(&mut buf, [1, 2, 3, 4]);

        let response = decode_response(&buf).unwrap();
        assert_eq!(response.id, 0x1234);
        assert_eq!(response.code, ResponseCode::NoError);
        assert!(!response.truncated);
        assert_eq!(response.answers.len(), 1);
        assert_eq!(response.answers[0].name, "example.com");
        assert_eq!(response.answers[0].ttl, 300);
        assert_eq!(response.answers[0].rdata, RData::A(Ipv4Addr::new(1, 2, 3, 4)));
    }

    #[test]
    fn test_decode_preserves_answer_order() {
        let mut buf = response_header(1, 0x8180, 3);
        push_a_record(&mut buf, [1, 1, 1, 1]);
        push_a_record(&mut buf, [2, 2, 2, 2]);
        push_a_record(&mut buf, [3, 3, 3, 3]);

        let response = decode_response(&buf).unwrap();
        let ips: Vec<_> = response
            .answers
            .iter()
            .map(|r| match &r.rdata {
                RData::A(ip) => ip.to_string(),
                other => panic!("unexpected rdata {:?}", other),
            })
            .collect();
        assert_eq!(ips, vec!["1.1.1.1", "2.2.2.2", "3.3.3.3"]);
    }

    #[test]
    fn test_decode_mx_record() {
        let mut buf = response_header(1, 0x8180, 1);
        buf.extend_from_slice(&[0xC0, 0x0C]);
        buf.extend_from_slice(&TYPE_MX.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&600u32.to_be_bytes());

        let mut rdata = Vec::new();
        rdata.extend_from_slice(&10u16.to_be_bytes());
        pack_name(&mut rdata, "mx.example.org").unwrap();
        buf.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        buf.extend_from_slice(&rdata);

        let response = decode_response(&buf).unwrap();
        assert_eq!(
            response.answers[0].rdata,
            RData::Mx {
                preference: 10,
                exchange: "mx.example.org".to_string()
            }
        );
    }

    #[test]
    fn test_decode_mx_with_compressed_exchange() {
        let mut buf = response_header(1, 0x8180, 1);
        buf.extend_from_slice(&[0xC0, 0x0C]);
        buf.extend_from_slice(&TYPE_MX.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&600u32.to_be_bytes());
        // preference + "mail" + pointer back to "example.com"
        buf.extend_from_slice(&9u16.to_be_bytes());
        buf.extend_from_slice(&5u16.to_be_bytes());
        buf.extend_from_slice(&[4, b'm', b'a', b'i', b'l', 0xC0, 0x0C]);

        let response = decode_response(&buf).unwrap();
        assert_eq!(
            response.answers[0].rdata,
            RData::Mx {
                preference: 5,
                exchange: "mail.example.com".to_string()
            }
        );
    }

    #[test]
    fn test_decode_txt_chunks() {
        let mut buf = response_header(1, 0x8180, 1);
        buf.extend_from_slice(&[0xC0, 0x0C]);
        buf.extend_from_slice(&TYPE_TXT.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&60u32.to_be_bytes());
        buf.extend_from_slice(&10u16.to_be_bytes());
        buf.extend_from_slice(&[4, b'v', b'=', b's', b'p', 4, b'f', b'1', b' ', b'x']);

        let response = decode_response(&buf).unwrap();
        assert_eq!(
            response.answers[0].rdata,
            RData::Txt(vec!["v=sp".to_string(), "f1 x".to_string()])
        );
    }

    #[test]
    fn test_decode_soa_record() {
        let mut buf = response_header(1, 0x8180, 1);
        buf.extend_from_slice(&[0xC0, 0x0C]);
        buf.extend_from_slice(&TYPE_SOA.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&3600u32.to_be_bytes());

        let mut rdata = Vec::new();
        pack_name(&mut rdata, "ns1.example.com").unwrap();
        pack_name(&mut rdata, "hostmaster.example.com").unwrap();
        rdata.extend_from_slice(&2024010101u32.to_be_bytes());
        rdata.extend_from_slice(&7200u32.to_be_bytes());
        rdata.extend_from_slice(&900u32.to_be_bytes());
        rdata.extend_from_slice(&1209600u32.to_be_bytes());
        rdata.extend_from_slice(&300u32.to_be_bytes());
        buf.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        buf.extend_from_slice(&rdata);

        let response = decode_response(&buf).unwrap();
        assert_eq!(
            response.answers[0].rdata,
            RData::Soa {
                mname: "ns1.example.com".to_string(),
                rname: "hostmaster.example.com".to_string(),
                serial: 2024010101,
                refresh: 7200,
                retry: 900,
                expire: 1209600,
                minimum: 300,
            }
        );
    }

    #[test]
    fn test_decode_srv_record() {
        let mut buf = response_header(1, 0x8180, 1);
        buf.extend_from_slice(&[0xC0, 0x0C]);
        buf.extend_from_slice(&TYPE_SRV.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&60u32.to_be_bytes());

        let mut rdata = Vec::new();
        rdata.extend_from_slice(&10u16.to_be_bytes());
        rdata.extend_from_slice(&20u16.to_be_bytes());
        rdata.extend_from_slice(&5060u16.to_be_bytes());
        pack_name(&mut rdata, "sip.example.com").unwrap();
        buf.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        buf.extend_from_slice(&rdata);

        let response = decode_response(&buf).unwrap();
        assert_eq!(
            response.answers[0].rdata,
            RData::Srv {
                priority: 10,
                weight: 20,
                port: 5060,
                target: "sip.example.com".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_caa_record() {
        let mut buf = response_header(1, 0x8180, 1);
        buf.extend_from_slice(&[0xC0, 0x0C]);
        buf.extend_from_slice(&TYPE_CAA.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&60u32.to_be_bytes());

        let mut rdata = vec![0u8, 5];
        rdata.extend_from_slice(b"issue");
        rdata.extend_from_slice(b"letsencrypt.org");
        buf.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        buf.extend_from_slice(&rdata);

        let response = decode_response(&buf).unwrap();
        assert_eq!(
            response.answers[0].rdata,
            RData::Caa {
                flags: 0,
                tag: "issue".to_string(),
                value: "letsencrypt.org".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_rejects_caa_tag_overrun() {
        let mut buf = response_header(1, 0x8180, 1);
        buf.extend_from_slice(&[0xC0, 0x0C]);
        buf.extend_from_slice(&TYPE_CAA.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&60u32.to_be_bytes());
        // Tag length claims 40 bytes inside a 4-byte RDATA.
        buf.extend_from_slice(&4u16.to_be_bytes());
        buf.extend_from_slice(&[0, 40, b'i', b's']);
        assert!(decode_response(&buf).is_err());
    }

    #[test]
    fn test_decode_unknown_type_kept_opaque() {
        let mut buf = response_header(1, 0x8180, 1);
        buf.extend_from_slice(&[0xC0, 0x0C]);
        buf.extend_from_slice(&99u16.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&60u32.to_be_bytes());
        buf.extend_from_slice(&3u16.to_be_bytes());
        buf.extend_from_slice(&[0xDE, 0xAD, 0x01]);

        let response = decode_response(&buf).unwrap();
        assert_eq!(
            response.answers[0].rdata,
            RData::Other {
                type_code: 99,
                data: vec![0xDE, 0xAD, 0x01]
            }
        );
    }

    #[test]
    fn test_decode_nxdomain_rcode() {
        let buf = response_header(7, 0x8183, 0);
        let response = decode_response(&buf).unwrap();
        assert_eq!(response.code, ResponseCode::NxDomain);
        assert!(response.is_nxdomain());
        assert!(response.answers.is_empty());
    }

    #[test]
    fn test_decode_rejects_query_message() {
        // A query (QR clear) is not a response.
        let query = encode_query(1, "example.com", RecordType::A).unwrap();
        assert!(decode_response(&query).is_err());
    }

    #[test]
    fn test_decode_rejects_count_overrun() {
        // Claims two answers, carries one.
        let mut buf = response_header(1, 0x8180, 2);
        push_a_record(&mut buf, [1, 2, 3, 4]);
        assert!(decode_response(&buf).is_err());
    }

    #[test]
    fn test_decode_rejects_truncated_header() {
        assert!(decode_response(&[0x00, 0x01, 0x80]).is_err());
    }

    #[test]
    fn test_decode_rejects_rdata_overrun() {
        let mut buf = response_header(1, 0x8180, 1);
        buf.extend_from_slice(&[0xC0, 0x0C]);
        buf.extend_from_slice(&TYPE_A.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&300u32.to_be_bytes());
        buf.extend_from_slice(&400u16.to_be_bytes()); // RDLENGTH way past the end
        buf.extend_from_slice(&[1, 2, 3, 4]);
        assert!(decode_response(&buf).is_err());
    }

    #[test]
    fn test_decode_rejects_pointer_cycle_in_answer_name() {
        let mut buf = response_header(1, 0x8180, 1);
        // Answer name is a pointer to itself.
        let cycle_at = buf.len() as u16;
        buf.push(0xC0);
        buf.push(cycle_at as u8);
        assert!(decode_response(&buf).is_err());
    }

    #[test]
    fn test_truncation_flag_detection() {
        let buf = response_header(1, 0x8180 | 0x0200, 0);
        assert!(is_truncated(&buf));
        let response = decode_response(&buf).unwrap();
        assert!(response.truncated);

        let buf = response_header(1, 0x8180, 0);
        assert!(!is_truncated(&buf));
    }
}
