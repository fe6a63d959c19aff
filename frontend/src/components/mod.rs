pub mod sms_form;
