//! List command report data structures.

use super::output::{Output, Report};

/// Schema contents of the configured packages.
#[derive(Debug)]
pub struct ListReport {
    pub packages: Vec<PackageListing>,
}

#[derive(Debug)]
pub struct PackageListing {
    pub name: String,
    pub id: String,
    pub modules: Vec<ModuleListing>,
}

#[derive(Debug)]
pub struct ModuleListing {
    pub name: String,
    pub structs: Vec<String>,
    pub functions: Vec<FunctionListing>,
}

#[derive(Debug)]
pub struct FunctionListing {
    pub name: String,
    /// Arguments the caller supplies; implicit context parameters are excluded.
    pub explicit_params: usize,
    pub generic: bool,
}

impl FunctionListing {
    fn signature(&self) -> String {
        let generic = if self.generic { "<T…>" } else { "" };
        format!("{}{}({} args)", self.name, generic, self.explicit_params)
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, package) in self.packages.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(&format!("{} ({})", package.name, package.id));

            for module in &package.modules {
                out.list_item(0, &module.name);
                if !module.structs.is_empty() {
                    out.list_item(1, &format!("structs: {}", module.structs.join(", ")));
                }
                for function in &module.functions {
                    out.list_item(1, &function.signature());
                }
            }
        }
    }
}
