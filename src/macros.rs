macro_rules! static_assert {
    ($cond:expr, $msg:expr) => {
        const _: () = assert!($cond, $msg);
    };
    ($cond:expr) => {
        const _: () = assert!($cond);
    };
}

pub(crate) use static_assert;
