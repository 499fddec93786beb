//! TeamCity service messages.
//!
//! TeamCity scrapes build logs for lines of the form
//! `##teamcity[setParameter name='<key>' value='<value>']` and turns them
//! into build parameters. Values are written verbatim.

use std::fmt;

/// Parameter names this post-processor sets.
pub mod keys {
    pub const AWS_REGION: &str = "packer.artifact.aws.region";
    pub const AWS_AMI: &str = "packer.artifact.aws.ami";
    pub const ARTIFACT_ID: &str = "packer.artifact.id";
}

/// A single `setParameter` service message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceMessage<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl<'a> ServiceMessage<'a> {
    pub fn set_parameter(name: &'a str, value: &'a str) -> Self {
        Self { name, value }
    }
}

impl fmt::Display for ServiceMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "##teamcity[setParameter name='{}' value='{}']",
            self.name, self.value
        )
    }
}
