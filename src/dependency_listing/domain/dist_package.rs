/// Unit type of a Python distribution package
pub const PIP_PACKAGE_UNIT_TYPE: &str = "PipPackage";

/// A Python distribution package, the source unit a requirement resolves to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DistPackage {
    name: String,
}

impl DistPackage {
    pub fn new(name: String) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_type(&self) -> &'static str {
        PIP_PACKAGE_UNIT_TYPE
    }
}

impl std::fmt::Display for DistPackage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", PIP_PACKAGE_UNIT_TYPE, self.name)
    }
}
