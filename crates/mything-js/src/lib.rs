// napi macros generate code that triggers some clippy lints
#![allow(clippy::needless_pass_by_value)]

//! Node.js/TypeScript bindings for the MyThing value holder.
//!
//! ## Quick Start
//!
//! ```typescript
//! import { MyThing } from 'mything';
//!
//! MyThing.version(); // 'MyThing/1.0'
//!
//! const t = new MyThing(10);
//! t.value = 42;
//! t.increment(8); // 50
//! t.value; // 50
//! ```

mod convert;
mod thing_cls;

pub use thing_cls::JsMyThing;
