//! Wire format of the recommended-products response.
//!
//! The backend answers with the usual GraphQL envelope; these DTOs
//! mirror its camelCase field names and flatten into the catalog types.
//! Any GraphQL-level error fails the whole load; the caller decides how
//! to degrade.

use serde::Deserialize;
use vitrine_catalog::{
    CatalogError, Currency, Image, Money, OptionValue, Product, ProductId, ProductOption,
    ProductVariant, SelectedOption, Swatch, VariantId,
};

use crate::error::{GraphQLError, StorefrontError};

/// Parse a response body into products, surfacing GraphQL-level errors.
pub fn parse_products(body: &[u8]) -> Result<Vec<Product>, StorefrontError> {
    let envelope: Envelope = serde_json::from_slice(body)?;
    if !envelope.errors.is_empty() {
        return Err(StorefrontError::GraphQL(envelope.errors));
    }
    let data = envelope
        .data
        .ok_or_else(|| StorefrontError::MissingData("data".to_string()))?;
    data.products
        .nodes
        .into_iter()
        .map(ProductNode::into_product)
        .collect()
}

/// Parse a product-by-handle response body.
///
/// `Ok(None)` when the handle does not resolve to a product.
pub fn parse_product(body: &[u8]) -> Result<Option<Product>, StorefrontError> {
    let envelope: ProductEnvelope = serde_json::from_slice(body)?;
    if !envelope.errors.is_empty() {
        return Err(StorefrontError::GraphQL(envelope.errors));
    }
    let data = envelope
        .data
        .ok_or_else(|| StorefrontError::MissingData("data".to_string()))?;
    data.product.map(ProductNode::into_product).transpose()
}

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<ProductsData>,
    #[serde(default)]
    errors: Vec<GraphQLError>,
}

#[derive(Debug, Deserialize)]
struct ProductEnvelope {
    data: Option<ProductData>,
    #[serde(default)]
    errors: Vec<GraphQLError>,
}

#[derive(Debug, Deserialize)]
struct ProductData {
    product: Option<ProductNode>,
}

#[derive(Debug, Deserialize)]
struct ProductsData {
    products: ProductConnection,
}

#[derive(Debug, Deserialize)]
struct ProductConnection {
    nodes: Vec<ProductNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductNode {
    id: String,
    title: String,
    vendor: String,
    handle: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    description_html: String,
    #[serde(default)]
    options: Vec<OptionNode>,
    variants: VariantConnection,
}

impl ProductNode {
    fn into_product(self) -> Result<Product, StorefrontError> {
        let variants = self
            .variants
            .nodes
            .into_iter()
            .map(VariantNode::into_variant)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Product {
            id: ProductId::new(self.id),
            title: self.title,
            vendor: self.vendor,
            handle: self.handle,
            description: self.description,
            description_html: self.description_html,
            options: self.options.into_iter().map(OptionNode::into_option).collect(),
            variants,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OptionNode {
    name: String,
    #[serde(default)]
    option_values: Vec<OptionValueNode>,
}

impl OptionNode {
    fn into_option(self) -> ProductOption {
        ProductOption {
            name: self.name,
            values: self
                .option_values
                .into_iter()
                .map(|value| OptionValue {
                    name: value.name,
                    swatch: value.swatch.map(SwatchNode::into_swatch),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OptionValueNode {
    name: String,
    swatch: Option<SwatchNode>,
}

#[derive(Debug, Deserialize)]
struct SwatchNode {
    color: Option<String>,
    image: Option<SwatchImageNode>,
}

impl SwatchNode {
    fn into_swatch(self) -> Swatch {
        Swatch {
            color: self.color,
            image_url: self
                .image
                .and_then(|image| image.preview_image)
                .map(|preview| preview.url),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SwatchImageNode {
    preview_image: Option<ImageNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageNode {
    url: String,
    alt_text: Option<String>,
    width: Option<i32>,
    height: Option<i32>,
}

impl ImageNode {
    fn into_image(self) -> Image {
        Image {
            url: self.url,
            alt_text: self.alt_text,
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Debug, Deserialize)]
struct VariantConnection {
    nodes: Vec<VariantNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VariantNode {
    id: String,
    title: String,
    available_for_sale: bool,
    sku: Option<String>,
    price: MoneyNode,
    compare_at_price: Option<MoneyNode>,
    unit_price: Option<MoneyNode>,
    image: Option<ImageNode>,
    #[serde(default)]
    selected_options: Vec<SelectedOptionNode>,
}

impl VariantNode {
    fn into_variant(self) -> Result<ProductVariant, StorefrontError> {
        Ok(ProductVariant {
            id: VariantId::new(self.id),
            title: self.title,
            available_for_sale: self.available_for_sale,
            sku: self.sku,
            price: self.price.into_money()?,
            compare_at_price: self.compare_at_price.map(MoneyNode::into_money).transpose()?,
            unit_price: self.unit_price.map(MoneyNode::into_money).transpose()?,
            image: self.image.map(ImageNode::into_image),
            selected_options: self
                .selected_options
                .into_iter()
                .map(|option| SelectedOption::new(option.name, option.value))
                .collect(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MoneyNode {
    amount: String,
    currency_code: String,
}

impl MoneyNode {
    fn into_money(self) -> Result<Money, StorefrontError> {
        let currency = Currency::from_code(&self.currency_code)
            .ok_or_else(|| CatalogError::UnknownCurrency(self.currency_code.clone()))?;
        Ok(Money::from_decimal_str(&self.amount, currency)?)
    }
}

#[derive(Debug, Deserialize)]
struct SelectedOptionNode {
    name: String,
    value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two-hash delimiters: the swatch color token contains `"#`.
    const FULL_RESPONSE: &[u8] = br##"{
        "data": {
            "products": {
                "nodes": [
                    {
                        "id": "gid://shop/Product/1",
                        "title": "Trail Jacket",
                        "vendor": "Vitrine Supply",
                        "handle": "trail-jacket",
                        "description": "A jacket.",
                        "descriptionHtml": "<p>A jacket.</p>",
                        "options": [
                            {
                                "name": "Color",
                                "optionValues": [
                                    {
                                        "name": "Red",
                                        "swatch": {"color": "#b3202e", "image": null}
                                    },
                                    {
                                        "name": "Blue",
                                        "swatch": {
                                            "color": null,
                                            "image": {
                                                "previewImage": {
                                                    "url": "https://cdn.example.com/swatch-blue.jpg"
                                                }
                                            }
                                        }
                                    }
                                ]
                            }
                        ],
                        "variants": {
                            "nodes": [
                                {
                                    "id": "gid://shop/ProductVariant/11",
                                    "title": "Red",
                                    "availableForSale": true,
                                    "sku": "TJ-RED",
                                    "price": {"amount": "129.95", "currencyCode": "USD"},
                                    "compareAtPrice": null,
                                    "unitPrice": null,
                                    "image": {
                                        "url": "https://cdn.example.com/tj-red.jpg",
                                        "altText": "Trail Jacket in red",
                                        "width": 800,
                                        "height": 800
                                    },
                                    "selectedOptions": [{"name": "Color", "value": "Red"}]
                                },
                                {
                                    "id": "gid://shop/ProductVariant/12",
                                    "title": "Blue",
                                    "availableForSale": false,
                                    "sku": null,
                                    "price": {"amount": "119.95", "currencyCode": "USD"},
                                    "compareAtPrice": {"amount": "149.95", "currencyCode": "USD"},
                                    "unitPrice": null,
                                    "image": null,
                                    "selectedOptions": [{"name": "Color", "value": "Blue"}]
                                }
                            ]
                        }
                    }
                ]
            }
        }
    }"##;

    #[test]
    fn test_parse_full_response() {
        let products = parse_products(FULL_RESPONSE).unwrap();
        assert_eq!(products.len(), 1);

        let product = &products[0];
        assert_eq!(product.id.as_str(), "gid://shop/Product/1");
        assert_eq!(product.title, "Trail Jacket");
        assert_eq!(product.vendor, "Vitrine Supply");
        assert_eq!(product.handle, "trail-jacket");
        assert_eq!(product.variants.len(), 2);

        let red = &product.variants[0];
        assert!(red.available_for_sale);
        assert_eq!(red.sku.as_deref(), Some("TJ-RED"));
        assert_eq!(red.price.amount_cents, 12995);
        assert!(red.compare_at_price.is_none());
        assert_eq!(red.image.as_ref().unwrap().width, Some(800));
        assert_eq!(red.option_value("color"), Some("Red"));

        let blue = &product.variants[1];
        assert!(!blue.available_for_sale);
        assert_eq!(blue.compare_at_price.unwrap().amount_cents, 14995);
        assert!(blue.image.is_none());

        let option = product.color_option().unwrap();
        assert_eq!(option.values.len(), 2);
        assert_eq!(
            option.values[0].swatch.as_ref().unwrap().color.as_deref(),
            Some("#b3202e")
        );
        assert_eq!(
            option.values[1].swatch.as_ref().unwrap().image_url.as_deref(),
            Some("https://cdn.example.com/swatch-blue.jpg")
        );
    }

    #[test]
    fn test_parse_product_by_handle() {
        let body = br#"{
            "data": {
                "product": {
                    "id": "gid://shop/Product/1",
                    "title": "Trail Jacket",
                    "vendor": "Vitrine Supply",
                    "handle": "trail-jacket",
                    "variants": {
                        "nodes": [
                            {
                                "id": "gid://shop/ProductVariant/11",
                                "title": "Red",
                                "availableForSale": true,
                                "sku": null,
                                "price": {"amount": "129.95", "currencyCode": "USD"},
                                "compareAtPrice": null,
                                "unitPrice": null,
                                "image": null,
                                "selectedOptions": []
                            }
                        ]
                    }
                }
            }
        }"#;
        let product = parse_product(body).unwrap().unwrap();
        assert_eq!(product.handle, "trail-jacket");
        assert_eq!(product.variants.len(), 1);
    }

    #[test]
    fn test_parse_unknown_handle_is_none() {
        let body = br#"{"data": {"product": null}}"#;
        assert!(parse_product(body).unwrap().is_none());
    }

    #[test]
    fn test_parse_surfaces_graphql_errors() {
        let body = br#"{"data": null, "errors": [{"message": "Throttled"}]}"#;
        let err = parse_products(body).unwrap_err();
        match err {
            StorefrontError::GraphQL(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].message, "Throttled");
            }
            other => panic!("expected GraphQL error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_missing_data() {
        let err = parse_products(b"{}").unwrap_err();
        assert!(matches!(err, StorefrontError::MissingData(_)));
    }

    #[test]
    fn test_parse_rejects_bad_money() {
        let body = br#"{
            "data": {
                "products": {
                    "nodes": [
                        {
                            "id": "gid://shop/Product/1",
                            "title": "Trail Jacket",
                            "vendor": "Vitrine Supply",
                            "handle": "trail-jacket",
                            "variants": {
                                "nodes": [
                                    {
                                        "id": "gid://shop/ProductVariant/11",
                                        "title": "Red",
                                        "availableForSale": true,
                                        "sku": null,
                                        "price": {"amount": "not-a-number", "currencyCode": "USD"},
                                        "compareAtPrice": null,
                                        "unitPrice": null,
                                        "image": null,
                                        "selectedOptions": []
                                    }
                                ]
                            }
                        }
                    ]
                }
            }
        }"#;
        let err = parse_products(body).unwrap_err();
        assert!(matches!(err, StorefrontError::Money(_)));
    }

    #[test]
    fn test_parse_rejects_unknown_currency() {
        let body = br#"{
            "data": {
                "products": {
                    "nodes": [
                        {
                            "id": "gid://shop/Product/1",
                            "title": "Trail Jacket",
                            "vendor": "Vitrine Supply",
                            "handle": "trail-jacket",
                            "variants": {
                                "nodes": [
                                    {
                                        "id": "gid://shop/ProductVariant/11",
                                        "title": "Red",
                                        "availableForSale": true,
                                        "sku": null,
                                        "price": {"amount": "10.00", "currencyCode": "XTS"},
                                        "compareAtPrice": null,
                                        "unitPrice": null,
                                        "image": null,
                                        "selectedOptions": []
                                    }
                                ]
                            }
                        }
                    ]
                }
            }
        }"#;
        let err = parse_products(body).unwrap_err();
        assert!(matches!(err, StorefrontError::Money(_)));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_products(b"not json").unwrap_err();
        assert!(matches!(err, StorefrontError::Json(_)));
    }
}
