//! Parsing of `#[derive(FaultFamily)]` input.

use syn::{Data, DeriveInput, Error, Fields, Generics, Ident, Result, Type};

/// A fault family enum.
#[derive(Debug)]
pub struct Family {
    pub name: Ident,
    pub generics: Generics,
    /// Members in declaration order, which is also match order.
    pub members: Vec<Member>,
}

/// One variant of the family and the fault type it wraps.
#[derive(Debug)]
pub struct Member {
    pub variant: Ident,
    pub ty: Type,
}

impl Family {
    pub fn parse(input: &DeriveInput) -> Result<Self> {
        let data = match &input.data {
            Data::Enum(data) => data,
            _ => {
                return Err(Error::new_spanned(
                    &input.ident,
                    "FaultFamily can only be derived for enums",
                ))
            }
        };

        if data.variants.is_empty() {
            return Err(Error::new_spanned(
                &input.ident,
                "a fault family needs at least one variant",
            ));
        }

        let members = data
            .variants
            .iter()
            .map(|variant| match &variant.fields {
                Fields::Unnamed(fields) if fields.unnamed.len() == 1 => Ok(Member {
                    variant: variant.ident.clone(),
                    ty: fields.unnamed[0].ty.clone(),
                }),
                _ => Err(Error::new_spanned(
                    variant,
                    "each FaultFamily variant must wrap exactly one fault type, e.g. `Io(std::io::Error)`",
                )),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Family {
            name: input.ident.clone(),
            generics: input.generics.clone(),
            members,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_members_in_order() {
        let input: DeriveInput = parse_quote! {
            enum Storage {
                Io(std::io::Error),
                Corrupt(CorruptFault),
            }
        };
        let family = Family::parse(&input).unwrap();
        assert_eq!(family.name, "Storage");
        let names: Vec<String> = family.members.iter().map(|m| m.variant.to_string()).collect();
        assert_eq!(names, vec!["Io", "Corrupt"]);
    }

    #[test]
    fn test_rejects_struct() {
        let input: DeriveInput = parse_quote! {
            struct NotAFamily(std::io::Error);
        };
        let err = Family::parse(&input).unwrap_err();
        assert!(err.to_string().contains("only be derived for enums"));
    }

    #[test]
    fn test_rejects_unit_variant() {
        let input: DeriveInput = parse_quote! {
            enum Bad {
                Io(std::io::Error),
                Nothing,
            }
        };
        let err = Family::parse(&input).unwrap_err();
        assert!(err.to_string().contains("exactly one fault type"));
    }

    #[test]
    fn test_rejects_multi_field_variant() {
        let input: DeriveInput = parse_quote! {
            enum Bad {
                Pair(std::io::Error, CorruptFault),
            }
        };
        assert!(Family::parse(&input).is_err());
    }

    #[test]
    fn test_rejects_empty_enum() {
        let input: DeriveInput = parse_quote! {
            enum Empty {}
        };
        let err = Family::parse(&input).unwrap_err();
        assert!(err.to_string().contains("at least one variant"));
    }
}
