//! Application components and pages.

use leptos::prelude::*;
use leptos::server_fn::error::ServerFnError;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use vitrine_card::{color_swatches, CardState, SwatchFill, CYCLE_INTERVAL};
use vitrine_catalog::Product;

// ============================================================================
// Shell (SSR entry point)
// ============================================================================

#[cfg(feature = "ssr")]
pub fn shell(options: leptos::config::LeptosOptions) -> impl IntoView {
    use leptos::hydration::{AutoReload, HydrationScripts};
    use leptos::view;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options=options.clone() root=""/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Stylesheet id="leptos" href="/pkg/vitrine_app.css"/>
        <Meta name="description" content="Vitrine - a product showcase storefront"/>
        <Title text="Vitrine"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/products/:handle") view=ProductPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    view! {
        <header>
            <h1><a href="/">"Vitrine"</a></h1>
            <nav>
                <a href="/">"Home"</a>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>"Vitrine - a product showcase built on Spin + Leptos"</p>
        </footer>
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Home page with the recommended-products section.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="hero">
            <h2>"Shop the latest"</h2>
            <p>"Hover a card to preview its variants"</p>
        </div>

        <h2>"Recommended Products"</h2>
        <leptos::suspense::Suspense fallback=move || view! { <CardGridSkeleton/> }>
            <RecommendedProducts/>
        </leptos::suspense::Suspense>
    }
}

/// Single product page, addressed by URL handle.
#[component]
fn ProductPage() -> impl IntoView {
    let params = leptos_router::hooks::use_params_map();
    let handle = move || params.get().get("handle").unwrap_or_default();

    view! {
        <leptos::suspense::Suspense fallback=move || view! { <ProductDetailSkeleton/> }>
            <ProductDetail handle=handle()/>
        </leptos::suspense::Suspense>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_wasi::response::ResponseOptions>() {
            resp.set_status(leptos_wasi::prelude::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to Home"</a>
        </div>
    }
}

// ============================================================================
// Card Components
// ============================================================================

#[component]
fn RecommendedProducts() -> impl IntoView {
    let products = Resource::new(|| (), |_| get_recommended_products());

    view! {
        {move || products.get().map(|result| {
            // A failed or empty load renders the section with no cards.
            let products = result.ok().flatten().unwrap_or_default();
            view! {
                <div class="card-grid">
                    {products
                        .into_iter()
                        .filter_map(|product| {
                            let state = CardState::new(&product).ok()?;
                            Some(view! { <ProductCard product state/> })
                        })
                        .collect::<Vec<_>>()}
                </div>
            }
        })}
    }
}

#[component]
fn ProductCard(product: Product, state: CardState) -> impl IntoView {
    let product = StoredValue::new(product);
    let state = RwSignal::new(state);

    // One interval per hovered card. The effect tracks the memo rather
    // than the state itself, so preview ticks do not re-arm the timer.
    let wants_cycle = Memo::new(move |_| state.with(|s| s.wants_cycle()));
    let interval = StoredValue::new(None::<IntervalHandle>);
    let clear_interval = move || {
        if let Some(handle) = interval.try_update_value(|slot| slot.take()).flatten() {
            handle.clear();
        }
    };

    Effect::new(move |_| {
        clear_interval();
        if wants_cycle.get() {
            let handle =
                set_interval_with_handle(move || state.update(|s| s.tick()), CYCLE_INTERVAL).ok();
            interval.set_value(handle);
        }
    });
    on_cleanup(clear_interval);

    let display = Memo::new(move |_| product.with_value(|p| state.with(|s| s.display(p))));
    let href = product.with_value(|p| format!("/products/{}", p.handle));
    let title = product.with_value(|p| p.title.clone());
    let vendor = product.with_value(|p| p.vendor.clone());

    view! {
        <div
            class="product-card"
            on:pointerenter=move |_| state.update(|s| s.pointer_enter())
            on:pointerleave=move |_| state.update(|s| s.pointer_leave())
        >
            <a href=href.clone() class="card-media">
                {move || display.get().show_sale_badge.then(|| view! {
                    <span class="sale-badge">"Sale"</span>
                })}
                {move || match display.get().image {
                    Some(image) => view! {
                        <img src=image.url alt=image.alt_text.unwrap_or_default()/>
                    }.into_any(),
                    None => view! { <div class="card-media-empty"></div> }.into_any(),
                }}
            </a>
            <div class="card-info">
                <p class="card-vendor">{vendor}</p>
                <h3><a href=href>{title}</a></h3>
                <p class="card-price">
                    {move || display.get().compare_at_price.map(|compare_at| view! {
                        <s class="compare-at">{compare_at.to_string()}</s>
                    })}
                    <span class="price">{move || display.get().price.to_string()}</span>
                </p>
                <div class="swatch-row">
                    {move || {
                        product
                            .with_value(|p| state.with(|s| color_swatches(p, s)))
                            .into_iter()
                            .map(|swatch| {
                                let style = match &swatch.fill {
                                    SwatchFill::Color(color) => {
                                        format!("background-color: {}", color)
                                    }
                                    SwatchFill::Image(url) => {
                                        format!("background-image: url('{}')", url)
                                    }
                                    SwatchFill::None => String::new(),
                                };
                                let select_value = swatch.value.clone();
                                view! {
                                    <button
                                        type="button"
                                        class="swatch"
                                        class:selected=swatch.is_selected
                                        style=style
                                        title=swatch.value.clone()
                                        aria-label=swatch.value
                                        on:click=move |_| {
                                            product.with_value(|p| {
                                                state.update(|s| {
                                                    s.select_by_option_value(p, &select_value)
                                                })
                                            })
                                        }
                                    ></button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProductDetail(handle: String) -> impl IntoView {
    let handle_clone = handle.clone();
    let product = Resource::new(
        move || handle_clone.clone(),
        |handle| get_product(handle),
    );

    view! {
        {move || product.get().map(|result| match result {
            Ok(Some(product)) => {
                let variant = product.variants.get(product.initial_variant_index()).cloned();
                let image = variant.as_ref().and_then(|v| v.image.clone());
                let description = if product.description.is_empty() {
                    "No description available.".to_string()
                } else {
                    product.description.clone()
                };
                view! {
                    <div class="product-detail">
                        <div class="detail-media">
                            {match image {
                                Some(image) => view! {
                                    <img src=image.url alt=image.alt_text.unwrap_or_default()/>
                                }.into_any(),
                                None => view! { <div class="card-media-empty"></div> }.into_any(),
                            }}
                        </div>
                        <div>
                            <p class="card-vendor">{product.vendor.clone()}</p>
                            <h1>{product.title.clone()}</h1>
                            {variant.map(|variant| {
                                // Strike through only genuine discounts here;
                                // the card badge follows compare-at presence.
                                let compare_at = variant
                                    .compare_at_price
                                    .filter(|_| variant.is_on_sale());
                                view! {
                                    <p class="price detail-price">
                                        {compare_at.map(|compare_at| view! {
                                            <s class="compare-at">{compare_at.to_string()}</s>
                                        })}
                                        <span>{variant.price.to_string()}</span>
                                    </p>
                                }
                            })}
                            <p class="detail-description">{description}</p>
                            <a href="/" class="btn">"Back to Home"</a>
                        </div>
                    </div>
                }.into_any()
            },
            Ok(None) => view! {
                <p>"Product not found"</p>
                <a href="/">"Back to Home"</a>
            }.into_any(),
            Err(e) => view! {
                <p class="error">"Error loading product: " {e.to_string()}</p>
            }.into_any(),
        })}
    }
}

// ============================================================================
// Skeleton Components (Loading States)
// ============================================================================

#[component]
fn CardGridSkeleton() -> impl IntoView {
    view! {
        <div class="card-grid">
            <CardSkeleton/>
            <CardSkeleton/>
            <CardSkeleton/>
            <CardSkeleton/>
        </div>
    }
}

#[component]
fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="product-card">
            <div class="skeleton card-media-empty"></div>
            <div class="card-info">
                <div class="skeleton" style="width: 80%; height: 1.5rem; margin-bottom: 0.5rem;"></div>
                <div class="skeleton" style="width: 40%; height: 1.25rem;"></div>
            </div>
        </div>
    }
}

#[component]
fn ProductDetailSkeleton() -> impl IntoView {
    view! {
        <div class="product-detail">
            <div class="skeleton" style="height: 400px; border-radius: 8px;"></div>
            <div>
                <div class="skeleton" style="width: 60%; height: 2rem; margin-bottom: 1rem;"></div>
                <div class="skeleton" style="width: 30%; height: 2rem; margin-bottom: 2rem;"></div>
                <div class="skeleton" style="width: 100%; height: 4rem;"></div>
            </div>
        </div>
    }
}

// ============================================================================
// Server Functions (API)
// ============================================================================

/// Fetch the recommended products for the homepage.
///
/// `None` when the storefront is unreachable or answers garbage; the
/// section renders without cards in that case.
#[leptos::server(prefix = "/api")]
pub async fn get_recommended_products() -> Result<Option<Vec<Product>>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use vitrine_storefront::{load_recommended, MAX_RECOMMENDED};

        let client = storefront_client();
        Ok(load_recommended(&client, MAX_RECOMMENDED, &promo_config()).await)
    }

    #[cfg(not(feature = "ssr"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Fetch a single product by its URL handle.
#[leptos::server(prefix = "/api")]
pub async fn get_product(handle: String) -> Result<Option<Product>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        let client = storefront_client();
        client
            .product_by_handle(&handle)
            .await
            .map_err(|e| ServerFnError::new(format!("Storefront error: {}", e)))
    }

    #[cfg(not(feature = "ssr"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

#[cfg(feature = "ssr")]
fn storefront_client() -> vitrine_storefront::StorefrontClient {
    use vitrine_storefront::{Localization, StorefrontClient, StorefrontConfig};

    let shop_domain = spin_sdk::variables::get("shop_domain")
        .unwrap_or_else(|_| "demo.myshopify.com".to_string());
    let access_token =
        spin_sdk::variables::get("storefront_access_token").unwrap_or_else(|_| String::new());
    let country =
        spin_sdk::variables::get("storefront_country").unwrap_or_else(|_| "US".to_string());
    let language =
        spin_sdk::variables::get("storefront_language").unwrap_or_else(|_| "EN".to_string());

    StorefrontClient::new(StorefrontConfig::new(shop_domain, access_token))
        .with_localization(Localization::new(country, language))
}

/// Sale decoration is off unless a seed is configured.
#[cfg(feature = "ssr")]
fn promo_config() -> vitrine_storefront::PromoConfig {
    use vitrine_storefront::PromoConfig;

    match spin_sdk::variables::get("promo_sale_seed")
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
    {
        Some(seed) => PromoConfig::default().with_sale_sampler(seed),
        None => PromoConfig::default(),
    }
}
