//! Code generation state.

use vue_template_compiler::modules::data_gen_fns;
use vue_template_compiler::{CompilerOptions, GenDataFn};

/// State shared while generating code for one template.
#[derive(Debug, Clone)]
pub struct CodegenState<'a> {
    /// Options the template was compiled with.
    pub options: &'a CompilerOptions,
    /// Data fragment generators of the registered modules.
    pub data_gen_fns: Vec<GenDataFn>,
}

impl<'a> CodegenState<'a> {
    /// Create the state for the given compiler options.
    pub fn new(options: &'a CompilerOptions) -> Self {
        Self {
            options,
            data_gen_fns: data_gen_fns(&options.modules),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vue_template_compiler::modules::class;

    #[test]
    fn test_collects_module_generators() {
        let options = CompilerOptions::new();
        assert_eq!(CodegenState::new(&options).data_gen_fns.len(), 2);

        let options = CompilerOptions::new().with_modules(vec![class::MODULE]);
        assert_eq!(CodegenState::new(&options).data_gen_fns.len(), 1);
    }
}
