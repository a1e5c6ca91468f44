#[macro_export]
macro_rules! convert_num {
    ($num: expr, $ty: ty) => {{
        // Bind once so `$num` is evaluated a single time.
        let num = $num;
        let from = std::any::type_name_of_val(&num);
        TryInto::<$ty>::try_into(num).context($crate::error::TryFromIntSnafu {
            from,
            to: stringify!($ty),
        })
    }};
}
