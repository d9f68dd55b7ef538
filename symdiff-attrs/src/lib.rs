mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `ErrorKind` trait from `symdiff-error` for the given struct.
///
/// The report built for the error is customized with the `error` attribute:
///
/// ```ignore
/// use symdiff_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("unknown name `{}`", self.name),
///     labels = ["this name"],
///     help = "only `sin`, `cos` and `ln` are recognized",
/// )]
/// pub struct UnknownName {
///     pub name: String,
/// }
/// ```
///
/// | Tag       | Description                                                                      |
/// | --------- | -------------------------------------------------------------------------------- |
/// | `message` | The message displayed at the top of the report.                                  |
/// | `labels`  | An array of label texts, one per span of the error, in the same order. Optional. |
/// | `help`    | Help text describing what the user can do to fix the error. Optional.            |
///
/// Each tag accepts an expression. The expressions are evaluated inside a method of the struct, so
/// fields are accessed through `self`.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ::symdiff_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            #target
        }
    }.into()
}
