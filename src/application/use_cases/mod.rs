mod explain_query;

pub use explain_query::*;
