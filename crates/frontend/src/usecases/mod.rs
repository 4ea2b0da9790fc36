pub mod u101_create_shipping_label;
