use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, FnArg, ItemFn, PatIdent, PatType, ReturnType};

/// Emit `trace` events for a boundary function's arguments and return value.
///
/// The wrapped body runs inside a closure annotated with the function's
/// return type, so `?` and early `return` keep their meaning. Signature,
/// visibility, ABI and the remaining attributes are emitted untouched.
#[proc_macro_attribute]
pub fn trace_fn(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    let fn_attrs = &input.attrs;
    let fn_vis = &input.vis;
    let fn_signature = &input.sig;
    let fn_name = &input.sig.ident;
    let fn_inputs = &input.sig.inputs;
    let fn_output = &input.sig.output;
    let fn_block = &input.block;

    // Input arguments for the function
    let inputs_trace = fn_inputs.iter().map(|arg| match arg {
        FnArg::Typed(PatType { pat, .. }) => {
            if let syn::Pat::Ident(PatIdent { ident, .. }) = &**pat {
                quote! {
                    ::tracing::trace!(
                        function = stringify!(#fn_name),
                        argument = stringify!(#ident),
                        value = ?#ident,
                        "entering"
                    );
                }
            } else {
                quote! {}
            }
        }
        _ => quote! {},
    });

    // Mutable input arguments for the function
    let outputs_trace = fn_inputs.iter().map(|arg| match arg {
        FnArg::Typed(PatType { pat, ty, .. }) => {
            if let syn::Type::Reference(ty_ref) = &**ty {
                if ty_ref.mutability.is_some() {
                    if let syn::Pat::Ident(PatIdent { ident, .. }) = &**pat {
                        return quote! {
                            ::tracing::trace!(
                                function = stringify!(#fn_name),
                                argument = stringify!(#ident),
                                value = ?#ident,
                                "mutated"
                            );
                        };
                    }
                }
            }
            quote! {}
        }
        _ => quote! {},
    });

    let (output_ty, return_trace) = match fn_output {
        ReturnType::Default => (quote! { () }, quote! {}),
        ReturnType::Type(_, ty) => (
            quote! { #ty },
            quote! {
                ::tracing::trace!(
                    function = stringify!(#fn_name),
                    value = ?result,
                    "returned"
                );
            },
        ),
    };

    let expanded = quote! {
        #(#fn_attrs)*
        #fn_vis #fn_signature {
            #(#inputs_trace)*
            #[allow(clippy::redundant_closure_call)]
            let result = (|| -> #output_ty #fn_block)();
            #return_trace
            #(#outputs_trace)*
            result
        }
    };

    TokenStream::from(expanded)
}
