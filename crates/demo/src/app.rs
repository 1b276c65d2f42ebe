//! Demo host application
//!
//! Declares an address form as a descriptor list, renders it through
//! `FormBuilder`, and echoes submitted values under the form.

use dioxus::prelude::*;

use formbldr_core::{FieldDescriptor, FormValues, SubmitVariant, TextInputType, ValidationRule};
use formbldr_ui::{FormBuilder, SubmitHandler};

fn address_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::input("firstName", TextInputType::Text)
            .with_id("first-name")
            .with_label("First Name")
            .with_col(6)
            .full_width()
            .with_validation(ValidationRule::string().required("First name is required")),
        FieldDescriptor::input("lastName", TextInputType::Text)
            .with_id("last-name")
            .with_label("Last Name")
            .with_col(6)
            .full_width()
            .with_validation(ValidationRule::string().required("Last name is required")),
        FieldDescriptor::input("streetName", TextInputType::Text)
            .with_id("street-name")
            .with_label("Street Name")
            .with_col(10)
            .full_width()
            .with_validation(ValidationRule::string().required("Street name is required")),
        FieldDescriptor::input("streetNumber", TextInputType::Text)
            .with_id("street-number")
            .with_label("Street Number")
            .with_col(2)
            .full_width()
            .with_validation(
                ValidationRule::number()
                    .type_error("Please enter a valid number")
                    .required("Street number is required"),
            ),
        FieldDescriptor::input("postalCode", TextInputType::Text)
            .with_id("postal-code")
            .with_label("Postal Code")
            .with_col(4)
            .full_width()
            .with_validation(ValidationRule::string().required("Postal code is required")),
        FieldDescriptor::input("city", TextInputType::Text)
            .with_label("City")
            .with_col(8)
            .full_width()
            .with_validation(ValidationRule::string().required("City is required")),
        FieldDescriptor::input("country", TextInputType::Text)
            .with_label("Country")
            .with_col(12)
            .full_width()
            .with_validation(ValidationRule::string().required("Country is required")),
        FieldDescriptor::checkbox("acceptTerms")
            .with_id("accept-terms")
            .with_label("Accept terms and conditions")
            .with_col(12)
            .with_validation(
                ValidationRule::boolean().must_be_true("Please accept the terms and conditions"),
            ),
        FieldDescriptor::submit("submit", "Submit")
            .with_variant(SubmitVariant::Primary)
            .with_col(4)
            .full_width(),
    ]
}

pub fn app() -> Element {
    let mut result = use_signal(FormValues::default);

    let on_submit = use_hook(|| {
        SubmitHandler::new(move |values: FormValues| async move {
            tracing::info!(?values, "form submitted");
            result.set(values);
            Ok(())
        })
    });

    let submitted = {
        let mut entries: Vec<(String, String)> = result.read().clone().into_iter().collect();
        entries.sort();
        entries
    };

    rsx! {
        div {
            class: "flex h-screen flex-col justify-between lg:container lg:mx-auto px-3 lg:px-0",

            header {
                class: "flex pb-3 lg:mb-3 lg:border-b w-full items-center justify-between",
                h1 {
                    class: "text-5xl font-bold text-gray-500",
                    "JSON Form Builder"
                }
            }

            main {
                div {
                    class: "flex p-4 text-sm text-gray-800 rounded-lg bg-gray-50 mb-10",
                    role: "alert",
                    div {
                        span { class: "font-medium", "Note! " }
                        "This form does not send any data. It is only a functional example of the implementation of the code."
                    }
                }

                FormBuilder {
                    fields: address_fields(),
                    on_submit,
                }

                for (key, value) in submitted.iter() {
                    p {
                        key: "{key}",
                        strong { "{key}" }
                        ": {value}"
                    }
                }
            }

            footer {
                class: "text-center py-4",
                p { class: "text-sm", "FormBldr demo application" }
            }
        }
    }
}
