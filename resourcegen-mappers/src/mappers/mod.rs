mod deprecated;
mod documentation;
mod identifier;
mod json_add;
mod mutability;

pub use deprecated::DeprecatedMapper;
pub use documentation::DocumentationMapper;
pub use identifier::IdentifierMapper;
pub use json_add::JsonAddMapper;
pub use mutability::MutabilityMapper;
