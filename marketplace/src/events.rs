use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum MarketplaceEvent {
    Initialized(Address, Address, u32),
    Upgraded(u32),
    ListingAdded(u64, Address, Address, i128),
    ListingUpdated(u64),
    ListingCancelled(u64, Address),
    NewSale(u64, Address, Address, i128, i128),
    CurrencyWhitelistUpdated(Address, bool),
    AssetWhitelistUpdated(Address, bool),
    WhitelisterChanged(Address),
    ListingStateToggled(bool),
    StartTimeEnforcementSet(bool),
}

impl MarketplaceEvent {
    pub fn name(&self) -> &'static str {
        match self {
            MarketplaceEvent::Initialized(..) => stringify!(Initialized),
            MarketplaceEvent::Upgraded(..) => stringify!(Upgraded),
            MarketplaceEvent::ListingAdded(..) => stringify!(ListingAdded),
            MarketplaceEvent::ListingUpdated(..) => stringify!(ListingUpdated),
            MarketplaceEvent::ListingCancelled(..) => stringify!(ListingCancelled),
            MarketplaceEvent::NewSale(..) => stringify!(NewSale),
            MarketplaceEvent::CurrencyWhitelistUpdated(..) => {
                stringify!(CurrencyWhitelistUpdated)
            }
            MarketplaceEvent::AssetWhitelistUpdated(..) => stringify!(AssetWhitelistUpdated),
            MarketplaceEvent::WhitelisterChanged(..) => stringify!(WhitelisterChanged),
            MarketplaceEvent::ListingStateToggled(..) => stringify!(ListingStateToggled),
            MarketplaceEvent::StartTimeEnforcementSet(..) => {
                stringify!(StartTimeEnforcementSet)
            }
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            MarketplaceEvent::Initialized(admin, fee_recipient, fee_bps) => {
                v.push_back(admin.into_val(env));
                v.push_back(fee_recipient.into_val(env));
                v.push_back(fee_bps.into_val(env));
            }
            MarketplaceEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            MarketplaceEvent::ListingAdded(listing_id, token_owner, asset_contract, quantity) => {
                v.push_back(listing_id.into_val(env));
                v.push_back(token_owner.into_val(env));
                v.push_back(asset_contract.into_val(env));
                v.push_back(quantity.into_val(env));
            }
            MarketplaceEvent::ListingUpdated(listing_id) => {
                v.push_back(listing_id.into_val(env));
            }
            MarketplaceEvent::ListingCancelled(listing_id, token_owner) => {
                v.push_back(listing_id.into_val(env));
                v.push_back(token_owner.into_val(env));
            }
            MarketplaceEvent::NewSale(listing_id, buyer, recipient, quantity, total_price) => {
                v.push_back(listing_id.into_val(env));
                v.push_back(buyer.into_val(env));
                v.push_back(recipient.into_val(env));
                v.push_back(quantity.into_val(env));
                v.push_back(total_price.into_val(env));
            }
            MarketplaceEvent::CurrencyWhitelistUpdated(currency, status) => {
                v.push_back(currency.into_val(env));
                v.push_back(status.into_val(env));
            }
            MarketplaceEvent::AssetWhitelistUpdated(asset, status) => {
                v.push_back(asset.into_val(env));
                v.push_back(status.into_val(env));
            }
            MarketplaceEvent::WhitelisterChanged(whitelister) => {
                v.push_back(whitelister.into_val(env));
            }
            MarketplaceEvent::ListingStateToggled(enabled) => {
                v.push_back(enabled.into_val(env));
            }
            MarketplaceEvent::StartTimeEnforcementSet(enabled) => {
                v.push_back(enabled.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
