pub mod rule_facts;

pub use rule_facts::IRuleFacts;
