use unsynn::*;

keyword! {
    KFn = "fn";
}

unsynn! {
    struct UntilFn {
        items: Any<Cons<Except<KFn>, TokenTree>>,
    }

    struct UntilBody {
        items: Any<Cons<Except<BraceGroup>, TokenTree>>,
    }

    struct Body {
        items: BraceGroup,
    }

    struct TestFn {
        until_fn: UntilFn, _fn: KFn, name: Ident,
        until_body: UntilBody, body: Body
    }
}

impl quote::ToTokens for UntilFn {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for UntilBody {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for Body {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        tokens.extend(self.items.0.stream())
    }
}

/// Test attribute that installs the tracing subscriber and runs the body inside a span named
/// after the test.
///
/// ```ignore
/// use packed_variant_testhelpers::test;
///
/// #[test]
/// fn resize_shrinks() {
///     // `PACKED_VARIANT_LOG=trace` shows the resize events of this test
/// }
/// ```
#[proc_macro_attribute]
pub fn test(
    _attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item = TokenStream::from(item);
    let mut i = item.to_token_iter();
    let TestFn {
        until_fn,
        _fn,
        name,
        until_body,
        body,
    } = match i.parse::<TestFn>() {
        Ok(decl) => decl,
        Err(err) => {
            let msg = format!("#[packed_variant_testhelpers::test] expects a function: {err:?}");
            return quote::quote! { ::core::compile_error!(#msg); }.into();
        }
    };

    quote::quote! {
        #[::core::prelude::rust_2024::test]
        #until_fn fn #name #until_body {
            ::packed_variant_testhelpers::setup();
            let _span = ::packed_variant_testhelpers::test_span(::core::stringify!(#name));

            #body
        }
    }
    .into()
}
