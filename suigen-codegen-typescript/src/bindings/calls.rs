//! Type-safe call builders for exposed functions.

use suigen_codegen::CodeFragment;
use suigen_ir::{Function, Package};

use crate::{
    ast::{Const, JsObject, Method, Param},
    naming,
    type_mapper::is_implicit_parameter,
};

/// Spread that forwards caller type arguments only when some were given.
const TYPE_ARGUMENTS_SPREAD: &str =
    "(options.typeArguments?.length ? { typeArguments: [...options.typeArguments] } : {})";

/// One exposed function, classified for call construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallBinding<'a> {
    pub module: &'a str,
    pub function: &'a str,
    /// Parameters the caller must supply, in declaration order.
    pub explicit_params: usize,
    pub generic: bool,
}

impl<'a> CallBinding<'a> {
    pub fn new(module: &'a str, function: &'a str, def: &Function) -> Self {
        let explicit_params = def
            .parameters
            .iter()
            .filter(|param| !is_implicit_parameter(&param.ty))
            .count();

        Self {
            module,
            function,
            explicit_params,
            generic: def.has_type_parameters(),
        }
    }

    /// `readonly [TransactionArgument, ...]` with one slot per explicit parameter.
    pub fn arguments_tuple(&self) -> String {
        format!(
            "readonly [{}]",
            vec!["TransactionArgument"; self.explicit_params].join(", ")
        )
    }

    fn target(&self) -> String {
        format!("`${{packageId}}::{}::{}`", self.module, self.function)
    }

    /// The call-builder method for this function.
    pub fn method(&self) -> Method {
        let call = JsObject::new().raw("target", self.target());
        let method = Method::new().param(Param::new("tx", "Transaction"));

        let (method, call) = if self.explicit_params == 0 {
            (method, call.raw("arguments", "[]"))
        } else {
            let options = if self.generic {
                format!(
                    "{{ arguments: {}; typeArguments?: readonly string[] }}",
                    self.arguments_tuple()
                )
            } else {
                format!("{{ arguments: {} }}", self.arguments_tuple())
            };

            (
                method.param(Param::new("options", options)),
                call.spread_if(self.generic, TYPE_ARGUMENTS_SPREAD)
                    .raw("arguments", "[...options.arguments]"),
            )
        };

        method
            .returns("TransactionResult")
            .body_fragment(CodeFragment::block(
                "return tx.moveCall({",
                call.properties_to_fragments(),
                Some("});".to_string()),
            ))
    }
}

/// Call bindings grouped by module. Modules without exposed functions are skipped.
pub fn module_calls(package: &Package) -> Vec<(&str, Vec<CallBinding<'_>>)> {
    package
        .modules
        .iter()
        .filter(|(_, module)| !module.exposed_functions.is_empty())
        .map(|(module_name, module)| {
            let calls = module
                .exposed_functions
                .iter()
                .map(|(name, def)| CallBinding::new(module_name, name, def))
                .collect();
            (module_name.as_str(), calls)
        })
        .collect()
}

/// `export const {package}Package = { abi, packageId, <module>: { ... } } as const;`
pub fn package_object(package_name: &str, package: &Package) -> Const {
    let object = JsObject::new()
        .raw("abi", naming::abi_const_name(package_name))
        .shorthand("packageId");

    let object = module_calls(package)
        .into_iter()
        .fold(object, |object, (module, calls)| {
            let methods = calls.iter().fold(JsObject::new(), |methods, call| {
                methods.method(call.function, call.method())
            });
            object.object(module, methods)
        });

    Const::object(naming::package_const_name(package_name), object).as_const()
}
