use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Maximum number of nested groups
    pub max_depth: usize,
    /// Maximum depth of the parsed tree, bounding evaluation recursion
    pub max_tree_depth: usize,
    /// Require `(` to close with `)` and `[` with `]`
    pub strict_delimiters: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_depth: 256,
            max_tree_depth: 4096,
            strict_delimiters: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Config, figment::Error> {
        figment().extract()
    }
}

pub fn figment() -> Figment {
    Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("EXPRESSION_"))
}
