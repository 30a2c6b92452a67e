// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod fetch;
pub mod filter;
pub mod forms;
pub mod ids;
pub mod lookup;
pub mod model;
pub mod page;
pub mod screen;

pub use fetch::*;
pub use filter::*;
pub use forms::*;
pub use ids::*;
pub use lookup::*;
pub use model::*;
pub use page::*;
pub use screen::*;
