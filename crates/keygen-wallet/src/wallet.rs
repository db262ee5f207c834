//! Wallet assembly: the full identity tree for one root seed.
//!
//! ```text
//! root ─┬─ ownership        (root seed itself)
//!       ├─ management ──── network[t]   (one per target, optional)
//!       ├─ delegate
//!       ├─ transfer[t]      (one per target)
//!       └─ spawn[t]         (one per target)
//! ```
//!
//! Every node is a pure function of the root seed and its own context, so a
//! single branch can be re-derived with [`derive_node`] without rebuilding
//! the rest of the wallet.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

use keygen_core::types::{DerivationContext, Purpose, Revisions, Seed};

use crate::derive::derive_child_seed;
use crate::error::WalletError;
use crate::keys::{wallet_from_seed, WalletKeys};
use crate::network::{urbit_keys_from_seed, NetworkKeys};

/// Where a node sits in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMeta {
    #[serde(rename = "type")]
    pub purpose: Purpose,
    pub revision: u32,
    #[serde(rename = "ship")]
    pub target: Option<u32>,
}

/// Key material of a node: HD wallet keys, or crypt/auth keys for network
/// nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeKeys {
    Wallet(WalletKeys),
    Network(NetworkKeys),
}

/// A materialized point in the derivation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub metadata: NodeMeta,
    pub seed: Seed,
    pub keys: NodeKeys,
}

impl Node {
    /// HD keys, for every purpose except network.
    pub fn wallet_keys(&self) -> Option<&WalletKeys> {
        match &self.keys {
            NodeKeys::Wallet(keys) => Some(keys),
            NodeKeys::Network(_) => None,
        }
    }

    /// Crypt/auth keys, for network nodes only.
    pub fn network_keys(&self) -> Option<&NetworkKeys> {
        match &self.keys {
            NodeKeys::Network(keys) => Some(keys),
            NodeKeys::Wallet(_) => None,
        }
    }
}

/// Inputs to wallet assembly besides the root seed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalletConfig {
    /// Target indices; output branches follow this order exactly.
    pub targets: Vec<u32>,
    /// Mixed into every derivation and key materialization. Empty = none.
    pub password: String,
    /// Revision for each purpose.
    pub revisions: Revisions,
    /// Whether to build the network branch.
    pub include_network: bool,
    /// Reject repeated targets instead of emitting identical nodes.
    pub require_unique_targets: bool,
}

impl WalletConfig {
    /// Config for `targets` with no password, zero revisions and no network
    /// branch.
    pub fn new(targets: &[u32]) -> Self {
        Self {
            targets: targets.to_vec(),
            ..Self::default()
        }
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn revisions(mut self, revisions: Revisions) -> Self {
        self.revisions = revisions;
        self
    }

    pub fn include_network(mut self, include: bool) -> Self {
        self.include_network = include;
        self
    }

    pub fn require_unique_targets(mut self, require: bool) -> Self {
        self.require_unique_targets = require;
        self
    }

    fn context(&self, purpose: Purpose, target: Option<u32>) -> DerivationContext {
        DerivationContext {
            purpose,
            revision: self.revisions.get(purpose),
            target,
            password: self.password.clone(),
        }
    }
}

/// Every node derived from one root seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub owner: Node,
    pub manage: Node,
    pub delegate: Node,
    pub transfer: Vec<Node>,
    pub spawn: Vec<Node>,
    pub network: Vec<Node>,
}

impl Wallet {
    /// The root seed, as held by the ownership node.
    pub fn root_seed(&self) -> &Seed {
        &self.owner.seed
    }

    /// Nested-mapping form for structural comparison.
    pub fn to_json(&self) -> Result<serde_json::Value, WalletError> {
        serde_json::to_value(self).map_err(|e| WalletError::Serialization(e.to_string()))
    }
}

/// Build the complete wallet for `root`.
pub fn assemble_wallet(root: &Seed, config: &WalletConfig) -> Result<Wallet, WalletError> {
    debug!(
        targets = config.targets.len(),
        include_network = config.include_network,
        "wallet: assembling"
    );

    if config.require_unique_targets {
        let mut seen = HashSet::with_capacity(config.targets.len());
        if let Some(&dup) = config.targets.iter().find(|t| !seen.insert(**t)) {
            return Err(WalletError::DuplicateTarget(dup));
        }
    }

    let owner = ownership_node(root, config)?;
    let manage = wallet_node(root, Purpose::Manage, None, config)?;
    let delegate = wallet_node(root, Purpose::Delegate, None, config)?;

    let transfer = config
        .targets
        .iter()
        .map(|&t| wallet_node(root, Purpose::Transfer, Some(t), config))
        .collect::<Result<Vec<_>, _>>()?;
    let spawn = config
        .targets
        .iter()
        .map(|&t| wallet_node(root, Purpose::Spawn, Some(t), config))
        .collect::<Result<Vec<_>, _>>()?;

    let network = if config.include_network {
        config
            .targets
            .iter()
            .map(|&t| network_node(&manage.seed, t, config))
            .collect()
    } else {
        Vec::new()
    };

    info!(
        targets = config.targets.len(),
        network_nodes = network.len(),
        "wallet: assembled"
    );

    Ok(Wallet {
        owner,
        manage,
        delegate,
        transfer,
        spawn,
        network,
    })
}

/// Re-derive a single node of the wallet for `root`.
///
/// Transfer, spawn and network nodes need a `target`; the other purposes
/// ignore it. The result equals the corresponding node of
/// [`assemble_wallet`] for the same config.
pub fn derive_node(
    root: &Seed,
    purpose: Purpose,
    target: Option<u32>,
    config: &WalletConfig,
) -> Result<Node, WalletError> {
    debug!(%purpose, ?target, "wallet: deriving single node");
    match purpose {
        Purpose::Ownership => ownership_node(root, config),
        Purpose::Manage | Purpose::Delegate => wallet_node(root, purpose, None, config),
        Purpose::Transfer | Purpose::Spawn => {
            let t = target.ok_or(WalletError::MissingTarget(purpose))?;
            wallet_node(root, purpose, Some(t), config)
        }
        Purpose::Network => {
            let t = target.ok_or(WalletError::MissingTarget(purpose))?;
            let manage_seed = derive_child_seed(root, &config.context(Purpose::Manage, None));
            Ok(network_node(&manage_seed, t, config))
        }
    }
}

fn ownership_node(root: &Seed, config: &WalletConfig) -> Result<Node, WalletError> {
    Ok(Node {
        metadata: NodeMeta {
            purpose: Purpose::Ownership,
            revision: config.revisions.ownership,
            target: None,
        },
        seed: root.clone(),
        keys: NodeKeys::Wallet(wallet_from_seed(root, &config.password)?),
    })
}

fn wallet_node(
    parent: &Seed,
    purpose: Purpose,
    target: Option<u32>,
    config: &WalletConfig,
) -> Result<Node, WalletError> {
    let ctx = config.context(purpose, target);
    let seed = derive_child_seed(parent, &ctx);
    let keys = wallet_from_seed(&seed, &config.password)?;
    Ok(Node {
        metadata: NodeMeta {
            purpose,
            revision: ctx.revision,
            target,
        },
        seed,
        keys: NodeKeys::Wallet(keys),
    })
}

/// Network nodes hang off the management seed, not the root.
fn network_node(manage_seed: &Seed, target: u32, config: &WalletConfig) -> Node {
    let ctx = config.context(Purpose::Network, Some(target));
    let seed = derive_child_seed(manage_seed, &ctx);
    let keys = urbit_keys_from_seed(&seed, &config.password);
    Node {
        metadata: NodeMeta {
            purpose: Purpose::Network,
            revision: ctx.revision,
            target: Some(target),
        },
        seed,
        keys: NodeKeys::Network(keys),
    }
}
