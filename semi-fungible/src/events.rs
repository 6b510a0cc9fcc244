use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum SemiFungibleEvent {
    Initialized,
    Upgraded(u32),
    Mint(u64, Address, i128),
    Transfer(u64, Address, Address, i128),
    ApprovalForAll(Address, Address, bool),
}

impl SemiFungibleEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SemiFungibleEvent::Initialized => stringify!(Initialized),
            SemiFungibleEvent::Upgraded(..) => stringify!(Upgraded),
            SemiFungibleEvent::Mint(..) => stringify!(Mint),
            SemiFungibleEvent::Transfer(..) => stringify!(Transfer),
            SemiFungibleEvent::ApprovalForAll(..) => stringify!(ApprovalForAll),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            SemiFungibleEvent::Initialized => {}
            SemiFungibleEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            SemiFungibleEvent::Mint(token_id, to, amount) => {
                v.push_back(token_id.into_val(env));
                v.push_back(to.into_val(env));
                v.push_back(amount.into_val(env));
            }
            SemiFungibleEvent::Transfer(token_id, from, to, amount) => {
                v.push_back(token_id.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(to.into_val(env));
                v.push_back(amount.into_val(env));
            }
            SemiFungibleEvent::ApprovalForAll(owner, operator, approved) => {
                v.push_back(owner.into_val(env));
                v.push_back(operator.into_val(env));
                v.push_back(approved.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
