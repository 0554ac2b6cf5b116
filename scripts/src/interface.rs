//! Contract interface descriptions for the front-end.
//!
//! A structured listing of each contract's callable entry points and
//! emitted events, serialized to `<ContractName>.json` so client code can
//! construct calls without the Rust bindings. The descriptions are
//! maintained here, next to the code that deploys the contracts.

use std::{fs, io, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInterface {
    pub contract_name: String,
    pub entry_points: Vec<EntryPoint>,
    pub events: Vec<EventDef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPoint {
    pub name: String,
    pub args: Vec<Argument>,
    pub ret: String,
    pub is_mutable: bool,
    pub is_payable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDef {
    pub name: String,
    pub fields: Vec<Argument>,
}

impl ContractInterface {
    /// Serialize to `<dir>/<ContractName>.json`, fully overwriting any
    /// prior content. Returns the written path.
    pub fn write_to_dir(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(format!("{}.json", self.contract_name));
        let raw = serde_json::to_string(self)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(&path, raw)?;
        Ok(path)
    }
}

fn arg(name: &str, ty: &str) -> Argument {
    Argument {
        name: name.to_string(),
        ty: ty.to_string(),
    }
}

fn entry(name: &str, args: Vec<Argument>, ret: &str, is_mutable: bool, is_payable: bool) -> EntryPoint {
    EntryPoint {
        name: name.to_string(),
        args,
        ret: ret.to_string(),
        is_mutable,
        is_payable,
    }
}

fn event(name: &str, fields: Vec<Argument>) -> EventDef {
    EventDef {
        name: name.to_string(),
        fields,
    }
}

/// Interface of the `NftMarketplace` contract.
pub fn marketplace_interface() -> ContractInterface {
    let item_args = || vec![arg("nft_contract", "Address"), arg("token_id", "u64")];
    ContractInterface {
        contract_name: "NftMarketplace".to_string(),
        entry_points: vec![
            entry(
                "list_item",
                vec![
                    arg("nft_contract", "Address"),
                    arg("token_id", "u64"),
                    arg("price", "U512"),
                ],
                "()",
                true,
                false,
            ),
            entry("buy_item", item_args(), "()", true, true),
            entry("cancel_listing", item_args(), "()", true, false),
            entry(
                "update_listing",
                vec![
                    arg("nft_contract", "Address"),
                    arg("token_id", "u64"),
                    arg("new_price", "U512"),
                ],
                "()",
                true,
                false,
            ),
            entry("withdraw_proceeds", vec![], "()", true, false),
            entry("get_listing", item_args(), "Listing", false, false),
            entry(
                "get_proceeds",
                vec![arg("seller", "Address")],
                "U512",
                false,
                false,
            ),
        ],
        events: vec![
            event(
                "ItemListed",
                vec![
                    arg("seller", "Address"),
                    arg("nft_contract", "Address"),
                    arg("token_id", "u64"),
                    arg("price", "U512"),
                ],
            ),
            event(
                "ItemBought",
                vec![
                    arg("buyer", "Address"),
                    arg("nft_contract", "Address"),
                    arg("token_id", "u64"),
                    arg("price", "U512"),
                ],
            ),
            event(
                "ItemCanceled",
                vec![
                    arg("seller", "Address"),
                    arg("nft_contract", "Address"),
                    arg("token_id", "u64"),
                ],
            ),
        ],
    }
}

/// Interface of the `BasicNft` contract.
pub fn basic_nft_interface() -> ContractInterface {
    ContractInterface {
        contract_name: "BasicNft".to_string(),
        entry_points: vec![
            entry("mint", vec![], "u64", true, false),
            entry(
                "approve",
                vec![arg("operator", "Address"), arg("token_id", "u64")],
                "()",
                true,
                false,
            ),
            entry(
                "revoke_approval",
                vec![arg("token_id", "u64")],
                "()",
                true,
                false,
            ),
            entry(
                "transfer_from",
                vec![
                    arg("from", "Address"),
                    arg("to", "Address"),
                    arg("token_id", "u64"),
                ],
                "()",
                true,
                false,
            ),
            entry("owner_of", vec![arg("token_id", "u64")], "Address", false, false),
            entry(
                "get_approved",
                vec![arg("token_id", "u64")],
                "Option<Address>",
                false,
                false,
            ),
            entry("token_counter", vec![], "u64", false, false),
            entry("token_uri", vec![arg("token_id", "u64")], "String", false, false),
        ],
        events: vec![
            event(
                "Minted",
                vec![arg("token_id", "u64"), arg("owner", "Address")],
            ),
            event(
                "Approval",
                vec![
                    arg("owner", "Address"),
                    arg("approved", "Option<Address>"),
                    arg("token_id", "u64"),
                ],
            ),
            event(
                "Transfer",
                vec![
                    arg("from", "Address"),
                    arg("to", "Address"),
                    arg("token_id", "u64"),
                ],
            ),
        ],
    }
}
