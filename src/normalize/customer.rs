//! Customer normalizer

use super::fields::{bool_at, id_at, object_at, str_at};
use super::types::{
    BillingAddress, CanonicalCustomer, CarrierRep, PaymentProfile, SalesRep, ShippingAddress,
    ShippingOptions,
};
use crate::types::JsonValue;

/// Normalize a raw upstream customer record.
///
/// Addresses are first sought as nested objects (`BillAddress` /
/// `BillingAddress` and `PrimaryShipAddress` / `ShipAddress`); when neither
/// key is present the equivalent shape is reconstructed from flat
/// `BillingX` / `ShipToX` fields on the parent record. Ship-to company
/// defaults to the customer's company.
pub fn normalize_customer(raw: &JsonValue) -> CanonicalCustomer {
    let company = str_at(raw, &["Company", "CompanyName", "Name"]);

    let billing = match object_at(raw, &["BillAddress", "BillingAddress"]) {
        Some(nested) => billing_from_nested(nested),
        None => billing_from_flat(raw),
    };

    let mut shipping = match object_at(raw, &["PrimaryShipAddress", "ShipAddress"]) {
        Some(nested) => shipping_from_nested(nested),
        None => shipping_from_flat(raw),
    };
    if shipping.company.is_empty() {
        shipping.company = company.clone();
    }

    CanonicalCustomer {
        id: id_at(raw),
        company,
        billing,
        shipping,
        payment: PaymentProfile {
            method: str_at(raw, &["DefaultPaymentMethod", "PaymentMethodRef.Name"]),
            terms: str_at(raw, &["PaymentTerms", "TermRef.Name"]),
            tax_exempt: bool_at(raw, &["IsTaxExempt", "NonTaxable"]),
            has_agreement: bool_at(raw, &["HasPurchaseAgreement"]),
        },
        shipping_options: ShippingOptions {
            pay_method: str_at(raw, &["DefaultShipPaymentMethod"]),
            speed: str_at(raw, &["DefaultShipSpeed"]),
            short_ship_policy: str_at(raw, &["ShortShipPolicy"]),
        },
        carrier_rep: CarrierRep {
            name: str_at(raw, &["CarrierRepName"]),
            email: str_at(raw, &["CarrierRepEmail"]),
        },
        sales_rep: SalesRep {
            primary: str_at(raw, &["PrimaryRepName", "SalesRepRef.Name"]),
            secondary: str_at(raw, &["SecondaryRepName"]),
        },
    }
}

fn billing_from_nested(nested: &JsonValue) -> BillingAddress {
    BillingAddress {
        contact: str_at(nested, &["Contact", "ContactName"]),
        phone: str_at(nested, &["Phone"]),
        email: str_at(nested, &["Email"]),
        street: str_at(nested, &["Addr1", "Address1", "Street"]),
        suite: str_at(nested, &["Addr2", "Address2", "Suite"]),
        city: str_at(nested, &["City"]),
        state: str_at(nested, &["State"]),
        zip: str_at(nested, &["Zip", "PostalCode"]),
    }
}

fn billing_from_flat(raw: &JsonValue) -> BillingAddress {
    BillingAddress {
        contact: str_at(raw, &["BillingContact", "BillingContactName"]),
        phone: str_at(raw, &["BillingPhone"]),
        email: str_at(raw, &["BillingEmail"]),
        street: str_at(raw, &["BillingAddress1", "BillingAddress", "BillingStreet"]),
        suite: str_at(raw, &["BillingAddress2"]),
        city: str_at(raw, &["BillingCity", "City"]),
        state: str_at(raw, &["BillingState", "State"]),
        zip: str_at(raw, &["BillingZip", "Zip"]),
    }
}

fn shipping_from_nested(nested: &JsonValue) -> ShippingAddress {
    ShippingAddress {
        company: str_at(nested, &["Company", "Name"]),
        contact: str_at(nested, &["Contact", "ContactName"]),
        phone: str_at(nested, &["Phone"]),
        email: str_at(nested, &["Email"]),
        street: str_at(nested, &["Addr1", "Address1", "Street"]),
        suite: str_at(nested, &["Addr2", "Address2", "Suite"]),
        city: str_at(nested, &["City"]),
        state: str_at(nested, &["State"]),
        zip: str_at(nested, &["Zip", "PostalCode"]),
        is_residential: bool_at(nested, &["IsResidential"]),
    }
}

fn shipping_from_flat(raw: &JsonValue) -> ShippingAddress {
    ShippingAddress {
        company: str_at(raw, &["ShipToCompany"]),
        contact: str_at(raw, &["ShipToContact"]),
        phone: str_at(raw, &["ShipToPhone"]),
        email: str_at(raw, &["ShipToEmail"]),
        street: str_at(raw, &["ShipToAddress1", "ShipToAddress"]),
        suite: str_at(raw, &["ShipToAddress2"]),
        city: str_at(raw, &["ShipToCity"]),
        state: str_at(raw, &["ShipToState"]),
        zip: str_at(raw, &["ShipToZip"]),
        is_residential: bool_at(raw, &["ShipToIsResidential"]),
    }
}
