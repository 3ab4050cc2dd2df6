//! Helper macro generating port error enums with snake_case constructors.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (
        @ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*)
        $field:ident : $ty:ty, $($rest:tt)*
    ) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum StoreError {
            Offline => "store offline",
            Query { message: String } => "query failed: {message}",
            Stale { expected: u32, actual: u32 } => "stale: {expected} vs {actual}",
        }
    }

    #[test]
    fn unit_variant_gets_nullary_constructor() {
        assert_eq!(StoreError::offline().to_string(), "store offline");
    }

    #[test]
    fn string_fields_accept_str() {
        assert_eq!(StoreError::query("boom").to_string(), "query failed: boom");
    }

    #[test]
    fn non_string_fields_keep_their_types() {
        let err = StoreError::stale(1_u32, 2_u32);
        assert_eq!(err, StoreError::Stale {
            expected: 1,
            actual: 2
        });
    }
}
