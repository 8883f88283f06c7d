pub mod client_flows;
pub mod flows;
pub mod mock_ledger;
