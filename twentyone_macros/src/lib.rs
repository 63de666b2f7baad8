use proc_macro::TokenStream;
use quote::ToTokens;
use syn::parse_quote;

/// This macro is added before a method of the `Table` struct in the impl
/// block. Use this macro to first check if the current round phase is
/// exactly the phase in the attribute.
///
/// For example, `#[allowed_phase(AwaitingBet)]` will make a method first
/// check if the current round phase is `AwaitingBet`. If not, the method
/// will return `GameError::WrongPhase` without touching the table.
#[proc_macro_attribute]
pub fn allowed_phase(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut ast: syn::ImplItemFn = syn::parse(item).expect("allowed_phase expects a method");
    let phase: syn::Ident = syn::parse(attr).expect("allowed_phase expects a phase name");
    let message = format!("{} is only allowed in the {} phase", ast.sig.ident, phase);
    let guard: syn::Stmt = parse_quote! {
        if self.phase != RoundPhase::#phase {
            return Err(crate::GameError::WrongPhase(String::from(#message)));
        }
    };
    ast.block.stmts.insert(0, guard);
    ast.into_token_stream().into()
}
