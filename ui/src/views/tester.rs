use dioxus::prelude::*;

use crate::tester::RequestTesterView;

#[component]
pub fn RequestTester() -> Element {
    rsx! {
        RequestTesterView {}
    }
}
