use std::fmt::Display;

use alloy::primitives::{Address, TxHash};

#[derive(Clone, Copy, Debug)]
pub enum OnchainObject<'a> {
    Transaction(&'a TxHash),
    Address(&'a Address),
}

impl<'a> From<&'a TxHash> for OnchainObject<'a> {
    fn from(v: &'a TxHash) -> Self {
        Self::Transaction(v)
    }
}

impl<'a> From<&'a Address> for OnchainObject<'a> {
    fn from(v: &'a Address) -> Self {
        Self::Address(v)
    }
}

impl Display for OnchainObject<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OnchainObject::Transaction(txid) => txid.fmt(f),
            OnchainObject::Address(address) => address.fmt(f),
        }
    }
}

pub struct Link<'a, 'b> {
    /// Object of the link (Transaction or Address)
    object: OnchainObject<'a>,
    /// Domain of the explorer (will be used to build the URL)
    explorer_domain: &'b str,
}

impl<'a, 'b> From<(OnchainObject<'a>, &'b str)> for Link<'a, 'b> {
    fn from((object, explorer_domain): (OnchainObject<'a>, &'b str)) -> Self {
        Link {
            object,
            explorer_domain,
        }
    }
}

impl Display for Link<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.object {
            OnchainObject::Transaction(txid) => {
                write!(f, "https://{}/tx/{}", self.explorer_domain, txid)
            }
            OnchainObject::Address(address) => {
                write!(f, "https://{}/address/{}", self.explorer_domain, address)
            }
        }
    }
}

pub trait PrettyPrint {
    fn pretty(&self, explorer: Option<&str>) -> String;
}

impl PrettyPrint for OnchainObject<'_> {
    fn pretty(&self, explorer: Option<&str>) -> String {
        let kind = match self {
            OnchainObject::Transaction(_) => "Transaction ID",
            OnchainObject::Address(_) => "Address",
        };
        match explorer {
            Some(domain) => format!("{kind} {self}. View it at {}", Link::from((*self, domain))),
            None => format!("{kind} {self}."),
        }
    }
}
