use yew::prelude::*;

/// Terms-of-service body, rendered inside the legal modal.
#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <>
            <p class="modal-updated">{"Last Updated: September 30, 2025"}</p>

            <h3>{"1. Acceptance of Terms"}</h3>
            <p>
                {"By accessing and using TapBak (\"the Service\"), you accept and agree to be \
                 bound by the terms and provision of this agreement."}
            </p>

            <h3>{"2. Description of Service"}</h3>
            <p>
                {"TapBak provides digital loyalty card solutions for businesses, including \
                 Apple Wallet and Google Wallet integration, customer management, and \
                 analytics dashboard."}
            </p>

            <h3>{"3. Subscription Plans"}</h3>
            <p>{"TapBak offers two subscription tiers:"}</p>
            <ul>
                <li><strong>{"Starter Plan:"}</strong>{" £50/month with a 7-day free trial, supporting up to 100 customers"}</li>
                <li><strong>{"Growth Plan:"}</strong>{" £100/month with unlimited customers and custom branding"}</li>
            </ul>
            <p>{"Subscriptions renew automatically unless cancelled before the renewal date."}</p>

            <h3>{"4. Payment Terms"}</h3>
            <p>
                {"Payment is processed through Stripe. You agree to provide accurate billing \
                 information. Failure to pay may result in service suspension or termination."}
            </p>

            <h3>{"5. Free Trial"}</h3>
            <p>
                {"The Starter Plan includes a 7-day free trial. You may cancel anytime during \
                 the trial period without charge. After the trial, your subscription will \
                 automatically convert to a paid plan unless cancelled."}
            </p>

            <h3>{"6. User Responsibilities"}</h3>
            <p>{"You are responsible for:"}</p>
            <ul>
                <li>{"Maintaining the confidentiality of your account credentials"}</li>
                <li>{"All activities that occur under your account"}</li>
                <li>{"Ensuring your use complies with all applicable laws"}</li>
                <li>{"The accuracy of customer data you collect and store"}</li>
            </ul>

            <h3>{"7. Prohibited Activities"}</h3>
            <p>{"You may not:"}</p>
            <ul>
                <li>{"Use the Service for any illegal purpose"}</li>
                <li>{"Attempt to gain unauthorized access to the Service"}</li>
                <li>{"Interfere with or disrupt the Service"}</li>
                <li>{"Upload malicious code or content"}</li>
                <li>{"Resell or redistribute the Service without authorization"}</li>
            </ul>

            <h3>{"8. Data Ownership"}</h3>
            <p>
                {"You retain ownership of all customer data you input into the Service. TapBak \
                 will not use your data except to provide the Service to you."}
            </p>

            <h3>{"9. Service Availability"}</h3>
            <p>
                {"While we strive for 99.9% uptime, we do not guarantee uninterrupted service. \
                 We reserve the right to modify, suspend, or discontinue the Service with \
                 reasonable notice."}
            </p>

            <h3>{"10. Termination"}</h3>
            <p>
                {"You may cancel your subscription at any time. We reserve the right to \
                 suspend or terminate accounts that violate these Terms or for non-payment."}
            </p>

            <h3>{"11. Limitation of Liability"}</h3>
            <p>
                {"TapBak shall not be liable for any indirect, incidental, special, \
                 consequential, or punitive damages resulting from your use of or inability \
                 to use the Service."}
            </p>

            <h3>{"12. Changes to Terms"}</h3>
            <p>
                {"We reserve the right to modify these Terms at any time. Continued use of \
                 the Service after changes constitutes acceptance of the new Terms."}
            </p>

            <h3>{"13. Contact Information"}</h3>
            <p>{"For questions about these Terms, please contact us at support@tapbak.com"}</p>
        </>
    }
}

/// Privacy-policy body, rendered inside the legal modal.
#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <>
            <p class="modal-updated">{"Last Updated: September 30, 2025"}</p>

            <h3>{"1. Introduction"}</h3>
            <p>
                {"TapBak (\"we,\" \"our,\" or \"us\") is committed to protecting your privacy. \
                 This Privacy Policy explains how we collect, use, disclose, and safeguard \
                 your information when you use our Service."}
            </p>

            <h3>{"2. Information We Collect"}</h3>
            <h4>{"2.1 Information You Provide"}</h4>
            <ul>
                <li>{"Account information (name, email, business name)"}</li>
                <li>{"Payment information (processed securely through Stripe)"}</li>
                <li>{"Business branding (logos, colors, card designs)"}</li>
                <li>{"Customer data you input (names, phone numbers, email addresses, transaction history)"}</li>
            </ul>
            <h4>{"2.2 Automatically Collected Information"}</h4>
            <ul>
                <li>{"Device information (IP address, browser type, operating system)"}</li>
                <li>{"Usage data (features used, time spent, interactions)"}</li>
                <li>{"Log data (access times, pages viewed, errors)"}</li>
            </ul>

            <h3>{"3. How We Use Your Information"}</h3>
            <p>{"We use your information to:"}</p>
            <ul>
                <li>{"Provide, maintain, and improve the Service"}</li>
                <li>{"Process payments and transactions"}</li>
                <li>{"Send loyalty cards to customer wallets (Apple Wallet, Google Wallet)"}</li>
                <li>{"Generate QR codes and manage stamp tracking"}</li>
                <li>{"Provide analytics and insights"}</li>
                <li>{"Send administrative notifications and updates"}</li>
                <li>{"Respond to customer support inquiries"}</li>
                <li>{"Prevent fraud and ensure security"}</li>
            </ul>

            <h3>{"4. Data Sharing and Disclosure"}</h3>
            <p>{"We do not sell your personal information. We may share data with:"}</p>
            <ul>
                <li><strong>{"Service Providers:"}</strong>{" Stripe (payment processing), AWS (hosting), Apple/Google (wallet integration)"}</li>
                <li><strong>{"Legal Compliance:"}</strong>{" When required by law or to protect our rights"}</li>
                <li><strong>{"Business Transfers:"}</strong>{" In connection with mergers, acquisitions, or asset sales"}</li>
            </ul>

            <h3>{"5. Data Security"}</h3>
            <p>{"We implement industry-standard security measures including:"}</p>
            <ul>
                <li>{"Encryption of data in transit (HTTPS/TLS)"}</li>
                <li>{"Encryption of data at rest"}</li>
                <li>{"JWT-based authentication"}</li>
                <li>{"Regular security audits"}</li>
                <li>{"Access controls and monitoring"}</li>
            </ul>

            <h3>{"6. Data Retention"}</h3>
            <p>
                {"We retain your data for as long as your account is active or as needed to \
                 provide services. After account deletion, we may retain certain data for \
                 legal compliance, dispute resolution, and fraud prevention."}
            </p>

            <h3>{"7. Your Rights"}</h3>
            <p>{"You have the right to:"}</p>
            <ul>
                <li>{"Access your personal data"}</li>
                <li>{"Correct inaccurate data"}</li>
                <li>{"Request deletion of your data"}</li>
                <li>{"Export your data"}</li>
                <li>{"Opt-out of marketing communications"}</li>
                <li>{"Object to data processing"}</li>
            </ul>
            <p>{"To exercise these rights, contact us at support@tapbak.com"}</p>

            <h3>{"8. GDPR Compliance"}</h3>
            <p>{"For users in the European Economic Area (EEA), we process data based on:"}</p>
            <ul>
                <li>{"Contract performance (providing the Service)"}</li>
                <li>{"Consent (where applicable)"}</li>
                <li>{"Legitimate interests (fraud prevention, service improvement)"}</li>
                <li>{"Legal obligations"}</li>
            </ul>

            <h3>{"9. Cookies and Tracking"}</h3>
            <p>{"We use cookies and similar technologies for:"}</p>
            <ul>
                <li>{"Authentication and session management"}</li>
                <li>{"Analytics and performance monitoring"}</li>
                <li>{"User preferences"}</li>
            </ul>
            <p>{"You can control cookies through your browser settings."}</p>

            <h3>{"10. Third-Party Services"}</h3>
            <p>{"Our Service integrates with:"}</p>
            <ul>
                <li><strong>{"Apple Wallet:"}</strong>{" Subject to Apple's privacy policy"}</li>
                <li><strong>{"Google Wallet:"}</strong>{" Subject to Google's privacy policy"}</li>
                <li><strong>{"Stripe:"}</strong>{" Subject to Stripe's privacy policy"}</li>
            </ul>

            <h3>{"11. Children's Privacy"}</h3>
            <p>{"TapBak is not intended for users under 18. We do not knowingly collect data from children."}</p>

            <h3>{"12. International Data Transfers"}</h3>
            <p>
                {"Your data may be transferred to and processed in countries other than your \
                 own. We ensure appropriate safeguards are in place for such transfers."}
            </p>

            <h3>{"13. Changes to Privacy Policy"}</h3>
            <p>
                {"We may update this Privacy Policy periodically. We will notify you of \
                 significant changes via email or through the Service."}
            </p>

            <h3>{"14. Contact Us"}</h3>
            <p>{"For privacy-related questions or concerns, contact us at:"}</p>
            <p>{"Email: support@tapbak.com"}</p>
        </>
    }
}
