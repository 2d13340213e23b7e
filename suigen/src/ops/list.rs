//! List operation - schema contents of the configured packages.

use suigen_codegen_typescript::bindings::CallBinding;
use suigen_ir::Package;

use crate::reports::{FunctionListing, ListReport, ModuleListing, PackageListing};

/// Execute the list operation.
pub fn list(packages: &[(String, String, Package)]) -> ListReport {
    let packages = packages
        .iter()
        .map(|(name, id, package)| PackageListing {
            name: name.clone(),
            id: id.clone(),
            modules: package
                .modules
                .iter()
                .map(|(module_name, module)| ModuleListing {
                    name: module_name.clone(),
                    structs: module.structs.keys().cloned().collect(),
                    functions: module
                        .exposed_functions
                        .iter()
                        .map(|(function, def)| {
                            let call = CallBinding::new(module_name, function, def);
                            FunctionListing {
                                name: function.clone(),
                                explicit_params: call.explicit_params,
                                generic: call.generic,
                            }
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    ListReport { packages }
}
