mod rules_builder;

pub use rules_builder::RulesBuilder;
