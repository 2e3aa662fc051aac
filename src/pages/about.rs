//! About page: company values, how it works, blog features

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::icons::{
    IconBag, IconCart, IconCreditCard, IconKey, IconPackage, IconTruck, IconUpload, IconUser,
};
use crate::components::Features;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="BuyShop — About" />
        <div class="about">
            <div class="about-section">
                <div class="values">
                    <h1>"About Us"</h1>
                    <h3>"Welcome to BuyShop!"</h3>
                    <h2>"Innovation"</h2>
                    <p>
                        "BuyShop is your trusted platform connecting you to the deals you "
                        "need effortlessly, making online shopping a seamless experience."
                    </p>
                    <h2>"Customer-Centric"</h2>
                    <p>
                        "We are dedicated to fostering meaningful connections between "
                        "users and businesses by delivering value-driven solutions."
                    </p>
                    <h2>"Expertise"</h2>
                    <p>
                        "Our team brings years of expertise in retail, ensuring innovative "
                        "and reliable services tailored to your needs."
                    </p>
                    <h2>"Integrity"</h2>
                    <p>
                        "At BuyShop, we uphold values like transparency, honesty, and "
                        "integrity, ensuring a trustworthy environment for all."
                    </p>
                </div>
                <img src="/assets/happy-buyer-2.jpg" alt="Happy buyer" class="about-image" />
            </div>

            <div class="how-it-works">
                <h2>"How it works"</h2>
                <div class="work-section">
                    <div class="work-column">
                        <HowStep
                            title="1: Browse and Select"
                            text="Explore our marketplace to find unique items that catch your eye and add them to cart."
                        >
                            <IconCart />
                        </HowStep>
                        <HowStep
                            title="2: Create your Account"
                            text="Sign up for an account to make your purchase process seamless and secure."
                        >
                            <IconUser />
                        </HowStep>
                        <HowStep
                            title="3: Payment Options"
                            text="Choose your preferred method for a safe and convenient transaction."
                        >
                            <IconCreditCard />
                        </HowStep>
                        <HowStep
                            title="4: Receive Your Item"
                            text="Sit back and relax, your purchased item is shipped directly to your address."
                        >
                            <IconPackage />
                        </HowStep>
                    </div>
                    <div class="work-column">
                        <HowStep
                            title="1: Sign In to Start Selling"
                            text="Log in to your account to list your products for sale on BuyShop."
                        >
                            <IconKey />
                        </HowStep>
                        <HowStep
                            title="2: List Your Product"
                            text="Upload clear images of your product along with a detailed description to attract buyers."
                        >
                            <IconUpload />
                        </HowStep>
                        <HowStep
                            title="3: We Sell Your Product"
                            text="We prioritize the sale of your product."
                        >
                            <IconBag />
                        </HowStep>
                        <HowStep
                            title="4: We Ship Your Product"
                            text="Once sold, package your product nicely; we pick it up and deliver it."
                        >
                            <IconTruck />
                        </HowStep>
                    </div>
                </div>
            </div>

            <Features />
        </div>
    }
}

/// One step in the how-it-works columns; the child is the step icon
#[component]
fn HowStep(title: &'static str, text: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="work-step">
            {children()}
            <h3>{title}</h3>
            <p>{text}</p>
        </div>
    }
}
