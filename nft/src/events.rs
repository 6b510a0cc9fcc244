use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum NftEvent {
    Initialized,
    Upgraded(u32),
    Mint(u64, Address),
    Transfer(u64, Address, Address),
    ApprovalForAll(Address, Address, bool),
    RoyaltySet(Address, u32),
}

impl NftEvent {
    pub fn name(&self) -> &'static str {
        match self {
            NftEvent::Initialized => stringify!(Initialized),
            NftEvent::Upgraded(..) => stringify!(Upgraded),
            NftEvent::Mint(..) => stringify!(Mint),
            NftEvent::Transfer(..) => stringify!(Transfer),
            NftEvent::ApprovalForAll(..) => stringify!(ApprovalForAll),
            NftEvent::RoyaltySet(..) => stringify!(RoyaltySet),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            NftEvent::Initialized => {}
            NftEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            NftEvent::Mint(token_id, owner) => {
                v.push_back(token_id.into_val(env));
                v.push_back(owner.into_val(env));
            }
            NftEvent::Transfer(token_id, from, to) => {
                v.push_back(token_id.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(to.into_val(env));
            }
            NftEvent::ApprovalForAll(owner, operator, approved) => {
                v.push_back(owner.into_val(env));
                v.push_back(operator.into_val(env));
                v.push_back(approved.into_val(env));
            }
            NftEvent::RoyaltySet(recipient, bps) => {
                v.push_back(recipient.into_val(env));
                v.push_back(bps.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
