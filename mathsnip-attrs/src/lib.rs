mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for any kind of struct.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```ignore
/// use mathsnip_attrs::ErrorKind;
/// use mathsnip_error::{ErrorClass, ErrorKind};
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     class = ErrorClass::MalformedInput,
///     message = "unexpected end of input",
///     labels = ["add something here"],
/// )]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `class`     | The [`ErrorClass`] of the error.                                             |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | An array of label texts; the `i`th label points to the `i`th span.           |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// `message`, `labels` and `help` accept expressions that should evaluate to something
/// implementing [`ToString`]. For structs with named fields, the expressions are evaluated with
/// the members of the struct in scope, so they can be used in the expression (tuple structs are
/// not supported).
///
/// [`ErrorKind`]: https://docs.rs/mathsnip-error/latest/mathsnip_error/trait.ErrorKind.html
/// [`ErrorClass`]: https://docs.rs/mathsnip-error/latest/mathsnip_error/enum.ErrorClass.html
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            #target
        }
    }.into()
}
