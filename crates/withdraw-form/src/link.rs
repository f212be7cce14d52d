use std::fmt::{self, Display};

use vault_primitives::prelude::{ChainId, ContractAddr, TxHash};

#[derive(Clone, Copy, Debug)]
enum OnchainObject<'a> {
    Transaction(&'a TxHash),
    Contract(&'a ContractAddr),
}

impl Display for OnchainObject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OnchainObject::Transaction(hash) => hash.fmt(f),
            OnchainObject::Contract(addr) => addr.fmt(f),
        }
    }
}

/// Link to an object on the chain explorer ("Finder").
#[derive(Clone, Copy, Debug)]
pub struct FinderLink<'a, 'b> {
    /// Object of the link (Transaction or Contract)
    object: OnchainObject<'a>,
    /// Chain the object lives on, explorers are keyed by it
    chain_id: &'a ChainId,
    /// Domain of the explorer (will be used to build the URL)
    explorer_domain: &'b str,
}

impl<'a, 'b> From<(&'a TxHash, &'a ChainId, &'b str)> for FinderLink<'a, 'b> {
    fn from((hash, chain_id, explorer_domain): (&'a TxHash, &'a ChainId, &'b str)) -> Self {
        FinderLink {
            object: OnchainObject::Transaction(hash),
            chain_id,
            explorer_domain,
        }
    }
}

impl<'a, 'b> From<(&'a ContractAddr, &'a ChainId, &'b str)> for FinderLink<'a, 'b> {
    fn from((addr, chain_id, explorer_domain): (&'a ContractAddr, &'a ChainId, &'b str)) -> Self {
        FinderLink {
            object: OnchainObject::Contract(addr),
            chain_id,
            explorer_domain,
        }
    }
}

impl Display for FinderLink<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.object {
            OnchainObject::Transaction(_) => "tx",
            OnchainObject::Contract(_) => "address",
        };
        write!(
            f,
            "https://{}/{}/{}/{}",
            self.explorer_domain, self.chain_id, kind, self.object
        )
    }
}

/// One line describing a transaction, with an explorer link when we know one.
pub fn pretty_tx_hash(hash: &TxHash, chain_id: &ChainId, explorer: Option<&str>) -> String {
    match explorer {
        Some(domain) => {
            let link = FinderLink::from((hash, chain_id, domain));
            format!("Transaction {hash} on {chain_id}. View it at {link}")
        }
        None => format!("Transaction {hash} on {chain_id}."),
    }
}
