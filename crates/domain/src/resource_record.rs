use super::response_code::ResponseCode;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Type-specific payload of a resource record.
///
/// Only the types the lookup client extracts get dedicated variants;
/// everything else is carried opaquely so decoding never fails on an
/// unfamiliar answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Cname(String),
    Ns(String),
    Ptr(String),
    Mx { preference: u16, exchange: String },
    Txt(Vec<String>),
    Soa {
        mname: String,
        rname: String,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    },
    Srv {
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },
    Caa {
        flags: u8,
        tag: String,
        value: String,
    },
    Other { type_code: u16, data: Vec<u8> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,

    pub type_code: u16,

    pub ttl: u32,

    pub rdata: RData,
}

/// A decoded DNS response as seen by the resolver core.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub code: ResponseCode,

    pub truncated: bool,

    pub answers: Vec<ResourceRecord>,
}

impl DnsResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.code == ResponseCode::NxDomain
    }

    pub fn is_nodata(&self) -> bool {
        self.code == ResponseCode::NoError && self.answers.is_empty()
    }

    pub fn is_server_error(&self) -> bool {
        matches!(
            self.code,
            ResponseCode::ServFail | ResponseCode::Refused | ResponseCode::NotImp
        )
    }
}
