use std::fmt;

/// Top-level folders of a registry regulations tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Folder {
    Bpmn,
    Dmn,
    Forms,
    GlobalVars,
    DataModel,
    Target,
    BpAuth,
    Roles,
    Reports,
}

impl Folder {
    pub fn name(self) -> &'static str {
        match self {
            Folder::Bpmn => "bpmn",
            Folder::Dmn => "dmn",
            Folder::Forms => "forms",
            Folder::GlobalVars => "global-vars",
            Folder::DataModel => "data-model",
            Folder::Target => "target",
            Folder::BpAuth => "bp-auth",
            Folder::Roles => "roles",
            Folder::Reports => "reports",
        }
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
