pub mod cons;
pub mod cons_list;
pub mod sexp;


pub use cons::Cons;
pub use cons_list::ConsList;
pub use sexp::{HeapSexp, Sexp, SexpIter};


/// Builds a proper list (as a HeapSexp) from anything Into<HeapSexp>.
#[macro_export]
macro_rules! list {
    ($($elem:expr),* $(,)?) => {
        {
            #[allow(unused_mut)]
            let mut list = $crate::sexp::ConsList::new();
            $(
                list.append($elem);
            )*
            list.release()
        }
    };
}
