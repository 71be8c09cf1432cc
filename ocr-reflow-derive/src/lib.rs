//! Procedural derive macros for ocr-reflow.
//!
//! This crate provides the `ConfigValidator` derive used by the configuration
//! types of `ocr-reflow-core` and `ocr-reflow`.

use darling::{FromDeriveInput, FromField, FromMeta, ast};
use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Expr, Type, parse_macro_input};

/// Parsed arguments for `optional_range(min, max)`
#[derive(Debug, FromMeta)]
struct RangeArgs {
    min: Expr,
    max: Expr,
}

/// All supported validators that can be applied to a field.
#[derive(Debug, Default, FromMeta)]
struct Validators {
    /// `#[validate(min = expr)]` - value must be >= expr
    #[darling(default)]
    min: Option<Expr>,

    /// `#[validate(optional_range(min = expr, max = expr))]` - for Option<T> fields
    #[darling(default)]
    optional_range: Option<RangeArgs>,

    /// `#[validate(finite)]` - float value must not be NaN or infinite
    #[darling(default)]
    finite: bool,
}

/// A single field with its validation rules.
#[derive(Debug, FromField)]
#[darling(attributes(validate))]
struct ValidatedField {
    ident: Option<syn::Ident>,
    #[allow(dead_code)]
    ty: Type,
    #[darling(flatten)]
    validators: Validators,
}

/// The input struct for ConfigValidator derive.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(validate), supports(struct_named))]
struct ConfigValidatorInput {
    ident: syn::Ident,
    data: ast::Data<(), ValidatedField>,
    /// `#[validate(custom = "path::to::fn")]` - cross-field check run after the field checks.
    #[darling(default)]
    custom: Option<syn::Path>,
}

/// Derive macro for implementing ConfigValidator trait.
///
/// This macro generates a `ConfigValidator` implementation for configuration structs.
/// Validation rules are specified using the `#[validate(...)]` attribute on fields.
/// The struct must implement `Default`, which backs `get_defaults()`.
///
/// # Supported Validators
///
/// - `#[validate(min = value)]` - Validates that the field value is at least `value`
/// - `#[validate(optional_range(min = value, max = value))]` - Validates that a `Some` value of an `Option<T>` field is within [min, max]
/// - `#[validate(finite)]` - Rejects NaN and infinite float values
///
/// A struct-level `#[validate(custom = "Self::check")]` names a
/// `fn(&Self) -> Result<(), ConfigError>` that runs once every field passed.
///
/// # Example
///
/// ```rust,ignore
/// use ocr_reflow_derive::ConfigValidator;
///
/// #[derive(ConfigValidator, Default)]
/// #[validate(custom = "Self::check_order")]
/// pub struct GapConfig {
///     #[validate(finite, min = 0.0)]
///     pub merge_ratio: f32,
///
///     #[validate(finite, min = 0.0)]
///     pub space_ratio: f32,
///
///     // Fields without #[validate] are not validated
///     pub skip_empty: bool,
/// }
/// ```
#[proc_macro_derive(ConfigValidator, attributes(validate))]
pub fn derive_config_validator(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    ConfigValidatorInput::from_derive_input(&input)
        .map(|parsed| generate_config_validator(&parsed))
        .unwrap_or_else(|err| err.write_errors())
        .into()
}

fn generate_config_validator(input: &ConfigValidatorInput) -> proc_macro2::TokenStream {
    let name = &input.ident;

    let fields = input
        .data
        .as_ref()
        .take_struct()
        .expect("Only structs are supported");

    let validations: Vec<_> = fields
        .iter()
        .filter_map(|field| generate_field_validation(field))
        .collect();

    let custom = input.custom.as_ref().map(|path| {
        quote! {
            #path(self)?;
        }
    });

    quote! {
        impl crate::core::config::ConfigValidator for #name {
            fn validate(&self) -> Result<(), crate::core::config::ConfigError> {
                #(#validations)*
                #custom
                Ok(())
            }

            fn get_defaults() -> Self
            where
                Self: Sized,
            {
                Self::default()
            }
        }
    }
}

fn generate_field_validation(field: &ValidatedField) -> Option<proc_macro2::TokenStream> {
    let field_name = field.ident.as_ref()?;
    let field_name_str = field_name.to_string();
    let validators = &field.validators;

    let mut validations = Vec::new();

    // Finite check goes first so that NaN never reaches the comparisons below.
    if validators.finite {
        validations.push(quote! {
            if !self.#field_name.is_finite() {
                return Err(crate::core::config::ConfigError::InvalidConfig {
                    message: format!("{} must be finite, got {}", #field_name_str, self.#field_name),
                });
            }
        });
    }

    if let Some(min_expr) = &validators.min {
        validations.push(quote! {
            if self.#field_name < #min_expr {
                return Err(crate::core::config::ConfigError::InvalidConfig {
                    message: format!("{} must be at least {}", #field_name_str, #min_expr),
                });
            }
        });
    }

    if let Some(range) = &validators.optional_range {
        let min_expr = &range.min;
        let max_expr = &range.max;
        validations.push(quote! {
            if let Some(value) = self.#field_name {
                if !(#min_expr..=#max_expr).contains(&value) {
                    return Err(crate::core::config::ConfigError::InvalidConfig {
                        message: format!(
                            "{} must be between {} and {}",
                            #field_name_str,
                            #min_expr,
                            #max_expr
                        ),
                    });
                }
            }
        });
    }

    if validations.is_empty() {
        None
    } else {
        Some(quote! { #(#validations)* })
    }
}
